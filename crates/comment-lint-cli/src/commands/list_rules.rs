//! List rules command implementation.

use comment_lint_rules::{all_rules, Rule};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<20} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nSub-codes for filtering/suppression:");
    println!("  CL001.NoSpaceBefore   Missing space after //");
    println!("  CL001.SpacingBefore   Indentation error before comment text");
    println!("  CL001.Empty           Blank comment block");
    println!("  CL001.NotCapital      First word not capitalized");
    println!("  CL001.InvalidEndChar  Missing terminal punctuation");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  comment-lint check --rules inline-comment");
    println!("  comment-lint check --rules CL001");
}
