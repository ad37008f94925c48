//! List command implementation.

use oxicrc_core::catalog;
use serde::Serialize;

/// JSON serializable catalogue entry.
#[derive(Debug, Serialize)]
struct AlgorithmJson {
    name: &'static str,
    aliases: &'static [&'static str],
    width: u32,
    poly: String,
    init: String,
    xorout: String,
    reflected: bool,
    check: String,
}

pub fn cmd_list(verbose: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let entries: Vec<AlgorithmJson> = catalog::iter()
            .map(|entry| {
                let a = entry.algorithm();
                let digits = a.hex_digits();
                AlgorithmJson {
                    name: a.name(),
                    aliases: entry.aliases(),
                    width: a.width(),
                    poly: format!("0x{:0digits$X}", a.poly()),
                    init: format!("0x{:0digits$X}", a.init()),
                    xorout: format!("0x{:0digits$X}", a.xorout()),
                    reflected: a.direction().is_reflected(),
                    check: format!("0x{:0digits$X}", a.check()),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{:<20} {:>5} {:>18} {:>18} {:>18} {:>5} {:>18}",
        "Name", "Width", "Poly", "Init", "XorOut", "Refl", "Check"
    );
    println!("{}", "-".repeat(108));

    for entry in catalog::iter() {
        let a = entry.algorithm();
        let digits = a.hex_digits();
        println!(
            "{:<20} {:>5} {:>18} {:>18} {:>18} {:>5} {:>18}",
            a.name(),
            a.width(),
            format!("0x{:0digits$X}", a.poly()),
            format!("0x{:0digits$X}", a.init()),
            format!("0x{:0digits$X}", a.xorout()),
            if a.direction().is_reflected() { "yes" } else { "no" },
            format!("0x{:0digits$X}", a.check()),
        );
        if verbose && !entry.aliases().is_empty() {
            println!("{:<20} aliases: {}", "", entry.aliases().join(", "));
        }
    }

    println!("{}", "-".repeat(108));
    println!("{} algorithms", catalog::CATALOG.len());

    Ok(())
}
