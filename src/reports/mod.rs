use crate::cmd::notation::Conversion;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use dartforge::api::{Advice, AdviceOption, ChartRow, RemainderKind};

fn remainder_label(kind: RemainderKind, value: i32) -> String {
    match kind {
        RemainderKind::Remaining => format!("Score restant : {}", value),
        RemainderKind::Left => format!("Score laissé : {}", value),
    }
}

pub fn print_advice(advice: &Advice) {
    println!("\n{}", advice.heading);
    for line in &advice.guidance {
        println!("  {}", line);
    }

    if let Some(fallback) = &advice.fallback {
        println!("\n⚠️  {}", fallback);
        return;
    }

    for option in &advice.options {
        print_option(option);
    }
}

fn print_option(option: &AdviceOption) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let title_color = if option.is_checkout {
        Color::Green
    } else {
        Color::Yellow
    };

    table.add_row(vec![
        Cell::new(&option.title)
            .fg(title_color)
            .add_attribute(Attribute::Bold),
        Cell::new("Cible"),
        Cell::new("Score"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, step) in option.steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("Fléchette {}", i + 1)),
            Cell::new(step.target.to_string()).add_attribute(Attribute::Bold),
            Cell::new(remainder_label(step.kind, step.remaining)),
        ]);
    }
    println!("\n{}", table);

    if let Some(note) = &option.note {
        println!("Note : {}", note);
    }
}

pub fn print_advice_plain(advice: &Advice) {
    println!("{}", advice.heading);
    if let Some(fallback) = &advice.fallback {
        println!("{}", fallback);
        return;
    }
    for option in &advice.options {
        println!("{}", option.title);
        for (i, step) in option.steps.iter().enumerate() {
            println!(
                "  Fléchette {}: {} ({})",
                i + 1,
                step.target,
                remainder_label(step.kind, step.remaining)
            );
        }
        if let Some(note) = &option.note {
            println!("  Note : {}", note);
        }
    }
}

pub fn print_chart(rows: &[ChartRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Type"),
        Cell::new("Options"),
        Cell::new("Best").fg(Color::Cyan),
    ]);

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for row in rows {
        let kind = match (row.is_checkout, row.options) {
            (_, 0) => Cell::new("-"),
            (true, _) => Cell::new("Finish").fg(Color::Green),
            (false, _) => Cell::new("Setup").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(row.score).add_attribute(Attribute::Bold),
            kind,
            Cell::new(row.options),
            Cell::new(&row.best),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_conversions(rows: &[Conversion]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Notation"),
        Cell::new("Value"),
        Cell::new("Class"),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.input),
            Cell::new(&row.notation),
            Cell::new(row.value).set_alignment(CellAlignment::Right),
            Cell::new(row.class.as_deref().unwrap_or("-")),
        ]);
    }
    println!("\n{}", table);
}
