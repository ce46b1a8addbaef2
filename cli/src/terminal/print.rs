use colored::*;
use ec2inv_common::error::Error;
use ec2inv_common::inventory::ClassificationResult;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Target of events that are printed without a status symbol.
pub const PRINT_TARGET: &str = "ec2inv::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{}", msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn summary(result: &ClassificationResult, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let hosts: ColoredString = format!("{} hosts", result.host_count()).bold().green();
    let groups: ColoredString = format!("{} groups", result.groups().len()).bold().yellow();
    let output: String = format!("Inventory complete: {hosts} in {groups}");

    print(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
    centerln(&output);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

/// Reports a failed run on stderr. Written directly rather than through
/// tracing so that no log filter can hide it.
pub fn failure(err: &anyhow::Error) {
    eprintln!("{} {}", "[-]".red().bold(), failure_line(err));
}

/// `<kind> error: <message>` for our errors, the bare message otherwise.
pub fn failure_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(known) => format!("{} error: {:#}", known.kind(), err),
        None => format!("{:#}", err),
    }
}
