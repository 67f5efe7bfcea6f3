//! W3D CLI - Tool for inspecting, converting and validating W3D files.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use w3d::chunk::{ChunkData, ChunkPath, W3dDocument};
use w3d::interpret::FieldInterpreters;
use w3d::json::{from_json, to_json, JsonMode, SerializerRegistry};
use w3d::names::ChunkNames;
use w3d::settings::Settings;
use w3d::util::hex::preview;
use w3d::validate::{FileReport, RoundTripValidator};

/// Initialize logging: `-q` shows only errors, otherwise `RUST_LOG` or the
/// level picked by the verbosity flags.
fn init_logging(verbosity: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let base_level = match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut verbosity = 0u8;
    let mut quiet = false;
    let mut hex = false;
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => verbosity = verbosity.max(1),
            "-vv" | "--trace" => verbosity = 2,
            "-q" | "--quiet" => quiet = true,
            "--hex" => hex = true,
            _ => filtered_args.push(arg),
        }
    }
    init_logging(verbosity, quiet);

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    let mut settings = Settings::load();
    let mode = settings.json_mode_for_run(hex);

    let result = match filtered_args[0] {
        "info" | "i" => arg(&filtered_args, 1, "info <file>").and_then(|f| cmd_info(f, &mut settings)),
        "tree" | "t" => arg(&filtered_args, 1, "tree <file>").and_then(|f| cmd_tree(f, &mut settings)),
        "fields" | "f" => arg(&filtered_args, 1, "fields <file> [path]")
            .and_then(|f| cmd_fields(f, filtered_args.get(2).copied(), &mut settings)),
        "to-json" | "j" => arg(&filtered_args, 2, "to-json <in.w3d> <out.json> [--hex]")
            .and_then(|_| cmd_to_json(filtered_args[1], filtered_args[2], mode, &mut settings)),
        "from-json" | "b" => arg(&filtered_args, 2, "from-json <in.json> <out.w3d> [--hex]")
            .and_then(|_| cmd_from_json(filtered_args[1], filtered_args[2], mode, &settings)),
        "validate" | "val" => arg(&filtered_args, 1, "validate <dir|file>").and_then(cmd_validate),
        "roundtrip" | "r" => arg(&filtered_args, 1, "roundtrip <file>").and_then(|f| cmd_roundtrip(f, &mut settings)),
        "help" | "h" | "-h" | "--help" => {
            print_help();
            Ok(())
        }
        // Default: if file exists, show info; otherwise error
        other => {
            if Path::new(other).exists() {
                cmd_info(other, &mut settings)
            } else {
                eprintln!("Unknown command: {}", other);
                eprintln!();
                print_help();
                std::process::exit(1);
            }
        }
    };

    settings.save();
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Positional argument `index`, or a usage error.
fn arg<'a>(args: &[&'a str], index: usize, usage: &str) -> Result<&'a str> {
    match args.get(index).copied() {
        Some(a) => Ok(a),
        None => bail!("missing arguments\nUsage: w3d-cli {}", usage),
    }
}

fn print_help() {
    println!("w3d-cli - W3D chunk file toolkit");
    println!();
    println!("USAGE:");
    println!("    w3d-cli [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    i, info      <file>              Show chunk counts and load diagnostics");
    println!("    t, tree      <file>              Show the chunk hierarchy");
    println!("    f, fields    <file> [path]       Decode payloads (all leaves, or one path like 0/2)");
    println!("    j, to-json   <in> <out>          Export to JSON");
    println!("    b, from-json <in> <out>          Rebuild a binary file from JSON");
    println!("    val, validate <dir|file>         Round-trip check (binary, hex JSON, structured JSON)");
    println!("    r, roundtrip <file>              Binary round-trip check of one file");
    println!("    h, help                          Show this help");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Show debug output");
    println!("    -vv, --trace     Show trace output (very verbose)");
    println!("    -q, --quiet      Only show errors");
    println!("    --hex            Use RAW_DATA_HEX for every leaf (to-json / from-json)");
    println!();
    println!("EXAMPLES:");
    println!("    w3d-cli tree tank.w3d");
    println!("    w3d-cli fields tank.w3d 0/1");
    println!("    w3d-cli to-json tank.w3d tank.json");
    println!("    w3d-cli from-json tank.json tank_rebuilt.w3d");
    println!("    w3d-cli validate data/");
    println!();
    println!("NOTES:");
    println!("    - Passing a file directly is equivalent to 'info'");
    println!("    - RUST_LOG overrides the log level unless -q is given");
}

/// Load `path` with the settings applied and remember it.
fn load(path: &str, settings: &mut Settings) -> Result<W3dDocument> {
    let mut doc = W3dDocument::new();
    doc.set_use_mmap(settings.use_mmap);
    let found = doc
        .load_from_file(path)
        .with_context(|| format!("failed to open {}", path))?;
    if !found {
        tracing::warn!("{}: no chunks read", path);
    }
    doc.set_kind(settings.file_kind_for(path));
    settings.add_recent(PathBuf::from(path));
    Ok(doc)
}

fn cmd_info(path: &str, settings: &mut Settings) -> Result<()> {
    let doc = load(path, settings)?;
    let names = ChunkNames::builtin();
    let stats = doc.stats(&names);

    println!("File: {}", path);
    println!("Kind: {:?}", doc.kind());
    println!("Top-level chunks: {}", doc.chunks().len());
    println!();
    println!("Chunks:");
    println!("  Total:     {}", stats.total);
    println!("  Wrappers:  {}", stats.wrappers);
    println!("  Leaves:    {} ({} payload bytes)", stats.leaves, stats.payload_bytes);
    if stats.micro > 0 {
        println!("  Micro:     {}", stats.micro);
    }
    println!("  Max depth: {}", stats.max_depth);
    println!();
    println!("By type:");
    for (label, count) in &stats.by_label {
        println!("  {:<40} {}", label, count);
    }
    if !doc.diagnostics().is_empty() {
        println!();
        println!("Diagnostics:");
        for d in doc.diagnostics() {
            println!("  {}", d);
        }
    }
    Ok(())
}

fn cmd_tree(path: &str, settings: &mut Settings) -> Result<()> {
    let doc = load(path, settings)?;
    let names = ChunkNames::builtin();

    println!("File: {}", path);
    println!();
    doc.walk(|p, chunk, ctx| {
        let indent = "  ".repeat(p.depth().saturating_sub(1));
        let label = names.label_in_context(chunk.id(), ctx);
        let length = chunk.declared_length(ctx.parent_id);
        let kind = match chunk.data() {
            ChunkData::Children(c) => format!("{} children", c.len()),
            ChunkData::Leaf(_) if ctx.is_micro() => "micro".to_string(),
            ChunkData::Leaf(_) => "leaf".to_string(),
        };
        println!("{}{} [0x{:08X}] {} bytes, {}", indent, label, chunk.id(), length, kind);
    });
    Ok(())
}

fn cmd_fields(path: &str, chunk_path: Option<&str>, settings: &mut Settings) -> Result<()> {
    let doc = load(path, settings)?;
    let names = ChunkNames::builtin();
    let interpreters = FieldInterpreters::builtin();

    let print = |p: &ChunkPath| -> Result<()> {
        let chunk = doc.get(p).with_context(|| format!("no chunk at {}", p))?;
        let ctx = doc.context(p).with_context(|| format!("no chunk at {}", p))?;
        println!("{} {}", p, names.label_in_context(chunk.id(), &ctx));
        let fields = interpreters.interpret(Some(chunk), &ctx);
        if fields.is_empty() {
            match chunk.payload() {
                Some(payload) => println!("  raw: {}", preview(payload, 32)),
                None => println!("  (no fields)"),
            }
        }
        for field in fields {
            println!("  {}", field);
        }
        Ok(())
    };

    match chunk_path {
        Some(p) => print(&p.parse()?),
        None => {
            let mut leaves = Vec::new();
            doc.walk(|p, chunk, _| {
                if !chunk.has_children() {
                    leaves.push(p.clone());
                }
            });
            for p in &leaves {
                print(p)?;
            }
            Ok(())
        }
    }
}

fn cmd_to_json(input: &str, output: &str, mode: JsonMode, settings: &mut Settings) -> Result<()> {
    let doc = load(input, settings)?;
    let value = to_json(
        &doc,
        mode,
        &ChunkNames::builtin(),
        &SerializerRegistry::builtin(),
    );
    let text = if settings.pretty_json {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    std::fs::write(output, text).with_context(|| format!("failed to write {}", output))?;
    println!("Wrote {} ({:?})", output, mode);
    Ok(())
}

fn cmd_from_json(input: &str, output: &str, mode: JsonMode, settings: &Settings) -> Result<()> {
    let text = std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", input))?;
    let outcome = from_json(&value, mode, &SerializerRegistry::builtin())
        .with_context(|| format!("failed to import {}", input))?;

    let warnings = outcome.warnings.len();
    let doc = outcome.into_document(settings.file_kind_for(output));
    doc.save_to_file(output)
        .with_context(|| format!("failed to write {}", output))?;
    println!("Wrote {} ({} chunks, {} warnings)", output, doc.count(), warnings);
    Ok(())
}

fn cmd_validate(target: &str) -> Result<()> {
    let mut validator = RoundTripValidator::default();
    let path = Path::new(target);
    let reports = if path.is_dir() {
        validator.validate_dir(path)?
    } else {
        vec![validator.validate_file(path)?]
    };

    for report in &reports {
        print_report(report);
    }
    let failed = reports.iter().filter(|r| !r.passed()).count();
    println!();
    println!("{} files, {} passed, {} failed", reports.len(), reports.len() - failed, failed);
    if failed > 0 {
        bail!("{} files failed validation", failed);
    }
    Ok(())
}

fn print_report(report: &FileReport) {
    let mark = |ok: bool| if ok { "ok" } else { "FAIL" };
    println!(
        "{}: {} chunks, binary {}, hex JSON {}, structured JSON {}",
        report.path.display(),
        report.chunk_count,
        mark(report.binary_ok),
        mark(report.hex_json_ok),
        mark(report.structured_json_ok)
    );
    for message in &report.messages {
        println!("    {}", message);
    }
}

fn cmd_roundtrip(path: &str, settings: &mut Settings) -> Result<()> {
    let original = std::fs::read(path).with_context(|| format!("failed to read {}", path))?;
    let doc = load(path, settings)?;
    let rebuilt = doc.to_bytes()?;
    if rebuilt == original {
        println!("{}: identical ({} bytes, {} chunks)", path, original.len(), doc.count());
        return Ok(());
    }
    let offset = rebuilt
        .iter()
        .zip(&original)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| rebuilt.len().min(original.len()));
    bail!(
        "{}: output differs at byte {} ({} bytes written, {} expected)",
        path,
        offset,
        rebuilt.len(),
        original.len()
    )
}
