//! Output formatting for CLI

use crate::{
    search::{Path, SearchStats},
    tictactoe::Board,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Print a found path with its cost, or the no-path message
pub fn print_path<S: std::fmt::Display>(path: &Path<S>, cost: f64) {
    if path.is_empty() {
        println!("No path found.");
        return;
    }
    print_kv("Path", &path.to_string());
    print_kv("Steps", &path.edges().to_string());
    print_kv("Cost", &format_cost(cost));
}

pub fn print_search_stats(stats: &SearchStats) {
    print_stats_table(&[
        ("Expanded", &format_number(stats.expanded)),
        ("Generated", &format_number(stats.generated)),
    ]);
}

/// Print the board indented under the current section
pub fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}

/// Costs are shown without a fractional part when they have none
pub fn format_cost(cost: f64) -> String {
    if cost.fract() == 0.0 && cost.abs() < 1e15 {
        format!("{cost:.0}")
    } else {
        format!("{cost:.3}")
    }
}
