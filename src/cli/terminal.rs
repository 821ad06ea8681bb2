//! E/S de terminal: lectura de líneas y diálogos

use std::io::{self, Write};

use colored::*;

use crate::controllers::Prompt;

/// Leer una línea de stdin tras imprimir la etiqueta
pub fn read_line(label: &str) -> io::Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Leer un campo mostrando el valor actual; vacío conserva el valor
pub fn edit_field(label: &str, current: &mut String) -> io::Result<()> {
    let value = read_line(&format!("{} [{}]: ", label, current))?;
    if !value.is_empty() {
        *current = value;
    }
    Ok(())
}

pub fn title(text: &str) {
    println!();
    println!("{}", text.bright_green().bold());
    println!("{}", "=".repeat(text.chars().count()).bright_green());
}

pub fn error(text: &str) {
    println!("{}", format!("❌ {}", text).bright_red());
}

/// `Prompt` sobre stdin/stdout
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        match read_line(&format!("{} (s/N): ", message)) {
            Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "y" | "yes"),
            Err(_) => false,
        }
    }

    fn alert(&self, message: &str) {
        println!("{}", format!("ℹ️  {}", message).bright_cyan());
    }
}
