use injord_reader::TelegramReader;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <path-to-telegram-file> [--encoding <LABEL>] [--summary]",
            args[0]
        );
        std::process::exit(1);
    }

    let telegram_path = &args[1];
    let mut encoding: Option<&str> = None;
    let mut summary_only = false;

    // Parse --encoding argument
    if let Some(encoding_idx) = args.iter().position(|arg| arg == "--encoding") {
        if let Some(label) = args.get(encoding_idx + 1) {
            encoding = Some(label.as_str());
        } else {
            eprintln!("ERROR: --encoding flag requires a label argument.");
            std::process::exit(1);
        }
    }
    if args.iter().any(|arg| arg == "--summary") {
        summary_only = true;
    }

    println!("Reading telegram file: {}", telegram_path);
    if let Some(label) = encoding {
        println!("Using encoding override: {}", label);
    }
    println!("{}", "=".repeat(60));

    match TelegramReader::from_path(telegram_path, encoding) {
        Ok(reader) => {
            if reader.trailing_bytes() > 0 {
                eprintln!(
                    "WARNING: {} byte(s) left after the last section",
                    reader.trailing_bytes()
                );
            }

            let summary = reader.summary();
            println!("\nTelegram Summary:");
            println!("  Document ID: {}", display(&summary.document_id));
            println!(
                "  Version: {}",
                summary
                    .version
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
            println!("  Order number: {}", display(&summary.order_number));
            println!("  Order date: {}", display(&summary.order_date));
            println!("  Patient ID: {}", display(&summary.patient_id));
            println!("  Patient name: {}", display(&summary.patient_name));
            println!("  Items: {}", reader.telegram().content.items.len());

            if !summary_only {
                match reader.to_json_pretty() {
                    Ok(json) => {
                        println!("\n{}", "=".repeat(60));
                        println!("{}", json);
                    }
                    Err(e) => {
                        eprintln!("\nERROR: Failed to serialize telegram: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read telegram file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

fn display(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("-")
}
