use colored::{Color, Colorize};

use super::models::{CaseRecord, FetchRecord};

/// Announces a case before it is processed so an aborted run shows where
/// it stopped.
pub(super) fn print_case_start(case_no: usize, path: &str) {
    println!(
        "{} {} {}",
        "Case".bold(),
        case_no.to_string().cyan(),
        path.dimmed()
    );
}

pub(super) fn print_case_record(record: &CaseRecord) {
    print_fetch_line(1, &record.result1);
    print_fetch_line(2, &record.result2);
}

fn print_fetch_line(endpoint: u8, result: &FetchRecord) {
    let status_color = if result.status_code >= 400 {
        Color::Red
    } else if result.status_code >= 300 {
        Color::Yellow
    } else {
        Color::Green
    };

    let shape = if result.height >= 0 {
        format!("{} {}x{}", result.image_type, result.width, result.height)
    } else {
        result.image_type.clone()
    };

    println!(
        "  {} {} {} {}",
        format!("#{endpoint}").bold(),
        result.status_code.to_string().color(status_color),
        shape.dimmed(),
        format!("({} ms)", result.elapsed_millis).dimmed()
    );
}
