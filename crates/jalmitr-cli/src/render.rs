// SPDX-License-Identifier: Apache-2.0
//! Plain-text rendering for terminal output.

use jalmitr_model::{Location, Report};
use jalmitr_policies::Messages;

/// Left-aligned columns separated by two spaces; widths count chars.
pub(crate) fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }
    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (cell, width) in cells.zip(widths) {
        let pad = width.saturating_sub(cell.chars().count());
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 2));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

pub(crate) fn location_block(pincode: &str, location: Option<&Location>, m: &Messages) -> String {
    match location {
        Some(loc) => format!(
            "{pincode}\n- {}: {}\n- {}: {}\n- {}: {}\n",
            m.district, loc.district, m.state, loc.state, m.office, loc.office
        ),
        None => format!("{pincode}\n{}\n", m.pincode_not_found),
    }
}

pub(crate) fn report_text(report: &Report, m: &Messages) -> String {
    let mut out = location_block(report.pincode.as_str(), report.location.as_ref(), m);
    out.push_str(&format!("{} {}\n\n", m.type_of_sample, report.sample_type));
    out.push_str(m.prediction_result);
    out.push('\n');
    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.parameter.to_string(),
                r.value_text.clone(),
                r.standard_text.clone(),
                m.status_label(r.status).to_string(),
            ]
        })
        .collect();
    out.push_str(&table(
        &["Parameter", "Your Value", "Standard", "Status"],
        &rows,
    ));
    out.push('\n');

    let heading = if report.sample_type.is_effluent() {
        m.advice_title
    } else {
        m.general_advice
    };
    out.push_str(&format!("{heading}\n{}\n", report.summary));
    for line in &report.advice {
        out.push_str(&format!("- {line}\n"));
    }
    if let Some(note) = &report.closing_note {
        out.push_str(note);
        out.push('\n');
    }
    out
}
