use super::Paginator;
use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::units::Pt;

/// How the text of one cell is placed
#[derive(Debug, Clone, PartialEq)]
pub enum CellLayout {
    /// The whole field fits on one line
    Single,
    /// The field is packed onto several lines, codepoint by codepoint
    Wrapped(Vec<String>),
}

/// Sizing of one table row, computed before anything is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct RowPlan {
    pub font_size: Pt,
    /// Every column in the row has this width
    pub column_width: Pt,
    /// `font_size × 2`, the height of a row with no wrapped cells
    pub base_height: Pt,
    /// The larger of the base height and every cell's estimated height
    pub row_height: Pt,
    pub cells: Vec<CellLayout>,
}

impl RowPlan {
    /// Vertical distance between two lines of a wrapped cell
    pub fn line_step(&self) -> Pt {
        self.base_height - self.font_size / 2.0
    }
}

/// Estimates how many lines a field needs from the ratio between the room in
/// the cell and the measured width of the whole field. This is deliberately
/// cheap: the row height has to be known before any cell is drawn.
pub fn estimate_line_count(char_count: usize, text_width: Pt, inner_width: Pt) -> usize {
    if char_count == 0 || text_width <= inner_width {
        return 1;
    }

    let chars_per_line = ((inner_width * char_count as f32) / text_width).floor();
    let chars_per_line = if chars_per_line >= 1.0 {
        chars_per_line as usize
    } else {
        1
    };
    char_count.div_ceil(chars_per_line)
}

/// Packs `text` into lines no wider than `inner_width`, adding one codepoint at
/// a time. A codepoint that doesn't fit on an empty line gets a line to itself.
pub fn pack_cell_lines<M: Fn(&str) -> Pt>(text: &str, inner_width: Pt, measure: M) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if measure(&current) > inner_width && current.chars().count() > 1 {
            current.pop();
            lines.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Works out the column width, row height and cell layouts of a row spanning
/// `available_width`. A row without fields takes up no room at all.
pub fn plan_row<S: AsRef<str>, M: Fn(&str) -> Pt>(
    fields: &[S],
    font_size: Pt,
    available_width: Pt,
    cell_padding: Pt,
    measure: M,
) -> RowPlan {
    let base_height = font_size * 2.0;
    if fields.is_empty() {
        return RowPlan {
            font_size,
            column_width: Pt(0.0),
            base_height,
            row_height: Pt(0.0),
            cells: Vec::new(),
        };
    }

    let column_width = available_width / fields.len() as f32;
    let inner_width = column_width - cell_padding * 2.0;
    let line_step = base_height - font_size / 2.0;

    let mut row_height = base_height;
    let mut cells = Vec::with_capacity(fields.len());

    for field in fields {
        let field: &str = field.as_ref();
        let text_width = measure(field);
        if text_width <= inner_width {
            cells.push(CellLayout::Single);
            continue;
        }

        let lines = estimate_line_count(field.chars().count(), text_width, inner_width);
        let required = line_step * lines as f32 + font_size / 2.0;
        row_height = row_height.max(required);

        cells.push(CellLayout::Wrapped(pack_cell_lines(field, inner_width, &measure)));
    }

    RowPlan {
        font_size,
        column_width,
        base_height,
        row_height,
        cells,
    }
}

/// Draws one table row at the cursor: the cell borders first, then the text of
/// every cell, and moves the cursor to the bottom of the row.
///
/// The row is sized and checked against the page before anything is drawn, so
/// a row that can't fit even on a fresh page leaves no marks behind. A row
/// without fields draws nothing and leaves the cursor where it is.
pub fn draw_row<C: Canvas, S: AsRef<str>>(
    paginator: &mut Paginator,
    canvas: &mut C,
    config: &LayoutConfig,
    font_size: Pt,
    fields: &[S],
) -> Result<RowPlan, LayoutError> {
    if fields.is_empty() {
        log::debug!("skipping table row without fields");
        let available_width = paginator.available_width();
        return Ok(plan_row(fields, font_size, available_width, config.cell_padding, |_| Pt(0.0)));
    }

    paginator.set_font_size(canvas, font_size);

    let plan = plan_row(
        fields,
        font_size,
        paginator.available_width(),
        config.cell_padding,
        |s| canvas.text_width(s, font_size),
    );
    log::debug!(
        "table row: {} columns of {}pt, {}pt high",
        fields.len(),
        plan.column_width,
        plan.row_height
    );

    paginator.ensure_room(canvas, plan.row_height)?;

    let top = paginator.cursor().y;
    let bottom = top - plan.row_height;
    let left = paginator.margins().left;
    let right = left + plan.column_width * fields.len() as f32;

    canvas.set_line_width(config.border_width);
    canvas.draw_line((left, top), (right, top));
    canvas.draw_line((left, bottom), (right, bottom));
    for column in 0..=fields.len() {
        let x = left + plan.column_width * column as f32;
        canvas.draw_line((x, top), (x, bottom));
    }

    canvas.begin_text();
    for (column, (field, cell)) in fields.iter().zip(plan.cells.iter()).enumerate() {
        let x = left + plan.column_width * column as f32 + config.cell_padding;
        match cell {
            CellLayout::Single => {
                let y = top - plan.row_height / 2.0 - font_size / 3.0;
                canvas.draw_text_at(x, y, field.as_ref());
            }
            CellLayout::Wrapped(lines) => {
                for (y, line) in wrapped_baselines(&plan, top, lines.len())
                    .into_iter()
                    .zip(lines.iter())
                {
                    canvas.draw_text_at(x, y, line);
                }
            }
        }
    }
    canvas.end_text();

    paginator.advance(plan.row_height);
    Ok(plan)
}

/// Baselines of a block of `count` lines centred in a row whose top edge is at
/// `top`. The lowest baseline is kept at least one font size above the bottom
/// edge of the row.
pub fn wrapped_baselines(plan: &RowPlan, top: Pt, count: usize) -> Vec<Pt> {
    if count == 0 {
        return Vec::new();
    }

    let step = plan.line_step();
    let block_height = step * (count - 1) as f32 + plan.font_size;
    let mut first = top - (plan.row_height - block_height) / 2.0 - plan.font_size;

    let lowest = first - step * (count - 1) as f32;
    let floor = top - plan.row_height + plan.font_size;
    if lowest < floor {
        first += floor - lowest;
    }

    (0..count).map(|i| first - step * i as f32).collect()
}
