use colored::*;
use makeshift_core::Registry;

pub fn execute(registry: &Registry) {
    println!("{}", "Tasks".bold().underline());

    let width = registry
        .list()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    for (name, description) in registry.list() {
        println!(
            "  {}  {}",
            format!("{name:<width$}").cyan().bold(),
            description.bright_black()
        );
    }
}
