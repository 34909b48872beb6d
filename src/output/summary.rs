//! Summary of a single subnet.

use super::terminal::format_row;
use crate::error::Result;
use crate::models::Subnet;
use colored::Colorize;
use itertools::Itertools;

const LABEL_WIDTH: usize = 10;

/// One labelled line of a subnet summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

impl SummaryRow {
    fn new<T: ToString>(label: &'static str, value: T) -> Self {
        SummaryRow {
            label,
            value: value.to_string(),
        }
    }
}

/// Build the summary rows for `subnet`, listing at most `sibling_limit`
/// siblings.
pub fn summary_rows(subnet: &Subnet, sibling_limit: usize) -> Result<Vec<SummaryRow>> {
    let siblings = subnet.siblings()?;
    let mut listed = siblings.iter().take(sibling_limit).join(", ");
    if siblings.len() > sibling_limit {
        listed.push_str(&format!(
            "{}(+{} more)",
            if sibling_limit > 0 { ", " } else { "" },
            siblings.len() - sibling_limit
        ));
    }

    Ok(vec![
        SummaryRow::new("subnet", subnet),
        SummaryRow::new("family", subnet.family()),
        SummaryRow::new("mask", subnet.mask()?),
        SummaryRow::new("network", subnet.network()?),
        SummaryRow::new("broadcast", subnet.broadcast()?),
        SummaryRow::new("hosts", subnet.host_count()?),
        SummaryRow::new("siblings", siblings.len()),
        SummaryRow::new("list", listed),
    ])
}

/// Print the summary of `subnet` to stdout.
pub fn print_summary(subnet: &Subnet, sibling_limit: usize) -> Result<()> {
    log::info!("#Start print_summary({subnet}) sibling_limit={sibling_limit}");
    for row in summary_rows(subnet, sibling_limit)? {
        println!("{}", format_row(row.label, row.value.green(), LABEL_WIDTH));
    }
    Ok(())
}
