//! Directory Keys CLI — `dkey` command.
//!
//! Inspect and validate directory lookup keys, map signature content types
//! to their storage attributes, and encode or decode password-reset code
//! records.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use directory_keys::signature;
use directory_keys::time::now_millis;
use directory_keys::{AnyLookupKey, ForgotPasswordCodeField, KeyKind, RecoveryCode};

// ── Category helper ───────────────────────────────────────────────────────────

fn parse_category(label: &str) -> Result<KeyKind> {
    label.parse::<KeyKind>().with_context(|| {
        let known: Vec<_> = KeyKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("expected one of: {}", known.join(", "))
    })
}

// ── Output helper ─────────────────────────────────────────────────────────────

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Directory Keys CLI — validate lookup keys and signature/recovery-code
/// field names used by directory provisioning requests.
#[derive(Parser, Debug)]
#[command(
    name = "dkey",
    about = "Directory Keys CLI",
    version,
    long_about = "dkey — Directory Keys CLI\n\nValidate \"look up by\" keys for directory entities, map signature\ncontent types to attributes, and inspect password-reset code records."
)]
struct Cli {
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every entity category and its permitted keys
    Categories,

    /// Strictly parse a lookup key for a category
    Parse {
        /// Entity category (account, domain, server, cos, ...)
        category: String,

        /// Raw key string (case-sensitive, e.g. "id", "foreignPrincipal")
        by: String,
    },

    /// Guess the lookup key (id or name) for an identifier value
    Guess {
        /// Entity category
        category: String,

        /// Identifier value, e.g. a UUID or an email address
        value: String,
    },

    /// Map between signature content types and attributes
    Signature {
        #[command(subcommand)]
        subcommand: SignatureCommands,
    },

    /// Inspect password-reset code records
    Code {
        #[command(subcommand)]
        subcommand: CodeCommands,
    },
}

#[derive(Subcommand, Debug)]
enum SignatureCommands {
    /// Attribute that stores a signature of the given content type
    Attr {
        /// MIME type (text/plain or text/html)
        content_type: String,
    },

    /// Content type of the signature stored in the given attribute
    Mime {
        /// Attribute name
        attribute: String,
    },

    /// List all content type/attribute pairs
    List,
}

#[derive(Subcommand, Debug)]
enum CodeCommands {
    /// Look up a recovery code field by wire name
    Field {
        /// Wire name (email, code, expiryTime, resendCount)
        name: String,
    },

    /// Decode a JSON recovery code record
    Decode {
        /// Read from file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Encode a recovery code record as JSON
    Encode {
        #[arg(long)]
        email: String,

        #[arg(long)]
        code: String,

        /// Expiry time in Unix epoch milliseconds
        #[arg(long)]
        expiry_time: u64,

        #[arg(long, default_value_t = 0)]
        resend_count: u32,
    },
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let json = cli.json;
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Categories => cmd_categories(json, verbose),
        Commands::Parse { category, by } => cmd_parse(&category, &by, json, verbose),
        Commands::Guess { category, value } => cmd_guess(&category, &value, json, verbose),
        Commands::Signature { subcommand } => match subcommand {
            SignatureCommands::Attr { content_type } => cmd_signature_attr(&content_type, json),
            SignatureCommands::Mime { attribute } => cmd_signature_mime(&attribute, json),
            SignatureCommands::List => cmd_signature_list(json),
        },
        Commands::Code { subcommand } => match subcommand {
            CodeCommands::Field { name } => cmd_code_field(&name, json),
            CodeCommands::Decode { file } => cmd_code_decode(file.as_deref(), json, verbose),
            CodeCommands::Encode {
                email,
                code,
                expiry_time,
                resend_count,
            } => cmd_code_encode(email, code, expiry_time, resend_count),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

#[derive(Serialize)]
struct CategoryOutput {
    category: KeyKind,
    keys: Vec<&'static str>,
}

/// `dkey categories`
fn cmd_categories(json: bool, verbose: bool) -> Result<()> {
    let categories: Vec<_> = KeyKind::ALL
        .into_iter()
        .map(|kind| CategoryOutput {
            category: kind,
            keys: AnyLookupKey::permitted(kind),
        })
        .collect();

    if json {
        return print_json(&categories);
    }

    for entry in &categories {
        println!("{:<18} {}", entry.category, entry.keys.join(", "));
    }
    if verbose {
        println!();
        println!("{} categories", categories.len());
    }
    Ok(())
}

#[derive(Serialize)]
struct KeyOutput {
    category: KeyKind,
    key: AnyLookupKey,
}

/// `dkey parse <category> <by>`
fn cmd_parse(category: &str, by: &str, json: bool, verbose: bool) -> Result<()> {
    let kind = parse_category(category)?;
    let key = AnyLookupKey::parse(kind, by).with_context(|| {
        format!(
            "permitted keys for {kind}: {}",
            AnyLookupKey::permitted(kind).join(", ")
        )
    })?;

    if json {
        return print_json(&KeyOutput {
            category: kind,
            key,
        });
    }

    println!("{kind} by {key}");
    if verbose {
        println!("  Variant: {key:?}");
    }
    Ok(())
}

/// `dkey guess <category> <value>`
fn cmd_guess(category: &str, value: &str, json: bool, verbose: bool) -> Result<()> {
    let kind = parse_category(category)?;
    let key = AnyLookupKey::guess(kind, value)
        .ok_or_else(|| anyhow!("{kind} cannot be looked up by {value:?}; it needs a UUID id"))?;

    if json {
        return print_json(&KeyOutput {
            category: kind,
            key,
        });
    }

    println!("{kind} by {key}");
    if verbose {
        let shape = if directory_keys::is_uuid(value) {
            "UUID-shaped"
        } else {
            "not UUID-shaped"
        };
        println!("  Value {value:?} is {shape}");
    }
    Ok(())
}

#[derive(Serialize)]
struct SignatureOutput {
    content_type: &'static str,
    attribute: &'static str,
}

/// `dkey signature attr <content-type>`
fn cmd_signature_attr(content_type: &str, json: bool) -> Result<()> {
    let attribute = signature::attribute_for(content_type)?;
    if json {
        let content_type = signature::mime_type_for(attribute)?;
        return print_json(&SignatureOutput {
            content_type,
            attribute,
        });
    }
    println!("{attribute}");
    Ok(())
}

/// `dkey signature mime <attribute>`
fn cmd_signature_mime(attribute: &str, json: bool) -> Result<()> {
    let content_type = signature::mime_type_for(attribute)?;
    if json {
        let attribute = signature::attribute_for(content_type)?;
        return print_json(&SignatureOutput {
            content_type,
            attribute,
        });
    }
    println!("{content_type}");
    Ok(())
}

/// `dkey signature list`
fn cmd_signature_list(json: bool) -> Result<()> {
    let pairs: Vec<_> = signature::entries()
        .map(|(content_type, attribute)| SignatureOutput {
            content_type,
            attribute,
        })
        .collect();

    if json {
        return print_json(&pairs);
    }
    for pair in &pairs {
        println!("{:<12} {}", pair.content_type, pair.attribute);
    }
    Ok(())
}

/// `dkey code field <name>`
///
/// An unknown name is reported, not treated as an error.
fn cmd_code_field(name: &str, json: bool) -> Result<()> {
    let field = ForgotPasswordCodeField::from_wire_name(name);
    if json {
        return print_json(&serde_json::json!({ "name": name, "field": field }));
    }
    match field {
        Some(field) => println!("{field:?} ({})", field.wire_name()),
        None => println!("unknown field: {name}"),
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            debug!("reading recovery code from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            debug!("reading recovery code from stdin");
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// `dkey code decode [--file PATH]`
fn cmd_code_decode(file: Option<&Path>, json: bool, verbose: bool) -> Result<()> {
    let input = read_input(file)?;
    let record = RecoveryCode::from_json(&input).context("invalid recovery code record")?;
    let expired = record.is_expired(now_millis());

    if json {
        return print_json(&serde_json::json!({
            "record": record.to_map(),
            "expiresAt": record.expires_at(),
            "expired": expired,
        }));
    }

    println!("Recovery code");
    println!("  Email:        {}", record.email);
    println!("  Code:         {}", record.code);
    println!("  Expires:      {}", record.expires_at());
    println!("  Resend count: {}", record.resend_count);
    println!("  Status:       {}", if expired { "expired" } else { "valid" });
    if verbose {
        println!("  Expiry (ms):  {}", record.expiry_time);
    }
    Ok(())
}

/// `dkey code encode --email E --code C --expiry-time MS [--resend-count N]`
fn cmd_code_encode(email: String, code: String, expiry_time: u64, resend_count: u32) -> Result<()> {
    let record = RecoveryCode {
        email,
        code,
        expiry_time,
        resend_count,
    };
    let json = record.to_json().context("failed to encode recovery code")?;
    println!("{json}");
    Ok(())
}
