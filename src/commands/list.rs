use super::*;

pub(super) fn cmd_list(root: &Path, json_mode: bool) -> Result<i32> {
    let found = targets::discover_days(root)?;

    if json_mode {
        println!(
            "{}",
            json!({
                "command": "list",
                "count": found.len(),
                "targets": found,
            })
        );
        return Ok(0);
    }

    if found.is_empty() {
        println!(
            "  {} No day targets found under {}",
            "!".yellow(),
            root.join("src/bin").display().to_string().dimmed()
        );
        return Ok(0);
    }

    println!("\n  {} {} targets\n", "daywatch".cyan().bold(), found.len());
    for t in &found {
        println!(
            "  {}  {}",
            t.name.white().bold(),
            t.path.display().to_string().dimmed()
        );
    }
    println!();

    Ok(0)
}
