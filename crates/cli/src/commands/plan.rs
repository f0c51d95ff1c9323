use anyhow::Result;
use colored::*;
use makeshift_core::Registry;

pub fn execute(registry: &Registry, task: &str) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), task.cyan());

    let plan = registry
        .resolve(task)
        .map_err(|e| anyhow::anyhow!("Failed to get execution plan: {}", e))?;

    println!("\n{}:", "Execution order".bold());
    for (i, name) in plan.order.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }

    Ok(())
}
