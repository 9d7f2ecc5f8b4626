use clap::Parser;
use std::io::{self, BufRead, Write};

use filedex::{DiskStore, FileManager, FileRecord, FileType, ManagerError, MemoryStore, SortKey};

#[derive(Parser)]
#[command(name = "filedex")]
#[command(about = "An ordered in-memory registry over a directory of files")]
#[command(version)]
struct Cli {
    /// Directory holding the managed files
    #[arg(long = "root", default_value = ".")]
    root: String,

    /// Keep all file content in memory instead of touching the disk
    #[arg(long = "in-memory")]
    in_memory: bool,

    /// Print listings and stats as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut manager = if cli.in_memory {
        FileManager::new(Box::new(MemoryStore::new()))
    } else {
        FileManager::new(Box::new(DiskStore::new(cli.root.clone())))
    };

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let mut parts = line.split_whitespace();
        let cmd = match parts.next() {
            Some(c) => c,
            None => {
                prompt();
                continue;
            }
        };
        let args: Vec<&str> = parts.collect();
        if matches!(cmd, "quit" | "exit") {
            break;
        }
        run_command(&mut manager, cmd, &args, cli.json);
        prompt();
    }
}

fn prompt() {
    print!("filedex> ");
    let _ = io::stdout().flush();
}

fn run_command(manager: &mut FileManager, cmd: &str, args: &[&str], json: bool) {
    match cmd {
        "help" => print_help(),
        "list" => print_records(manager.registry().records().iter().collect(), json),
        "create" => match args {
            [name] => report(manager.create_at_end(name)),
            [name, pos] => match pos.parse::<usize>() {
                Ok(position) => report(manager.create_file(name, position)),
                Err(_) => eprintln!("Error: position must be a number"),
            },
            _ => usage("create <name> [position]"),
        },
        "read" => match args {
            [name] => match manager.read_file(name) {
                Ok(content) => print!("{}", content),
                Err(e) => eprintln!("Error: {}", e),
            },
            _ => usage("read <name>"),
        },
        "show" => match args {
            [name] => match manager.content_of(name) {
                Some(content) => print!("{}", content),
                None => eprintln!("Error: file '{}' is not tracked", name),
            },
            _ => usage("show <name>"),
        },
        "append" => match args {
            [name, text @ ..] if !text.is_empty() => {
                report(manager.append_content(name, &text.join(" ")))
            }
            _ => usage("append <name> <text>"),
        },
        "write" => match args {
            [name, text @ ..] if !text.is_empty() => {
                report(manager.overwrite_content(name, &text.join(" ")))
            }
            _ => usage("write <name> <text>"),
        },
        "delete" => match args {
            [name] => report(manager.delete_by_name(name)),
            _ => usage("delete <name>"),
        },
        "delete-at" => match args {
            [pos] => match pos.parse::<usize>() {
                Ok(position) => match manager.delete_at(position) {
                    Ok(name) => println!("Deleted '{}'", name),
                    Err(e) => eprintln!("Error: {}", e),
                },
                Err(_) => eprintln!("Error: position must be a number"),
            },
            _ => usage("delete-at <position>"),
        },
        "delete-all" => {
            let failed = manager.delete_all();
            if failed.is_empty() {
                println!("All files deleted.");
            } else {
                println!(
                    "Registry cleared; could not delete from disk: {}",
                    failed.join(", ")
                );
            }
        }
        "rename" => match args {
            [old, new] => report(manager.rename_file(old, new)),
            _ => usage("rename <old> <new>"),
        },
        "touch" => match args {
            [name] => report(manager.touch(name)),
            _ => usage("touch <name>"),
        },
        "stats" => match args {
            [name] => match manager.file_stats(name) {
                Ok(stats) if json => {
                    println!("{}", serde_json::to_string_pretty(&stats).unwrap_or_default())
                }
                Ok(stats) => {
                    println!("File: {}", stats.name);
                    println!("Type: {}", stats.file_type);
                    println!("Size: {} bytes", stats.size);
                    println!("Last Modified: {}", stats.modified.format("%Y-%m-%d %H:%M:%S"));
                    println!("Lines: {}", stats.lines);
                }
                Err(e) => eprintln!("Error: {}", e),
            },
            _ => usage("stats <name>"),
        },
        "find" => match args {
            [name] => match manager.find(name) {
                Some(record) => print_records(vec![record], json),
                None => println!("File not found."),
            },
            _ => usage("find <name>"),
        },
        "sort" => match args {
            [key] => match SortKey::from_str(key) {
                Some(key) => {
                    manager.sort(key);
                    println!("Files sorted.");
                }
                None => eprintln!("Error: sort key must be name, size or modified"),
            },
            _ => usage("sort <name|size|modified>"),
        },
        "prefix" => {
            let prefix = args.first().copied().unwrap_or("");
            print_records(manager.registry().search_by_prefix(prefix), json);
        }
        "grep" => {
            let needle = args.join(" ");
            print_records(manager.registry().search_by_content(&needle), json);
        }
        "type" => match args {
            [name] => match FileType::from_str(name) {
                Some(file_type) => {
                    print_records(manager.registry().search_by_type(file_type), json)
                }
                None => eprintln!("Error: unknown file type '{}'", name),
            },
            _ => usage("type <document|image|audio|video|archive|other>"),
        },
        "range" => match args {
            [min, max] => match (min.parse::<u64>(), max.parse::<u64>()) {
                (Ok(min), Ok(max)) => match manager.registry().search_by_size_range(min, max) {
                    Ok(records) => print_records(records, json),
                    Err(e) => eprintln!("Error: {}", e),
                },
                _ => eprintln!("Error: range bounds must be numbers"),
            },
            _ => usage("range <min> <max>"),
        },
        other => eprintln!("Unknown command '{}'. Try 'help'.", other),
    }
}

fn report(result: Result<(), ManagerError>) {
    match result {
        Ok(()) => println!("Done."),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn usage(text: &str) {
    eprintln!("Usage: {}", text);
}

fn print_records(records: Vec<&FileRecord>, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(&records).unwrap_or_default());
        return;
    }
    if records.is_empty() {
        println!("No files.");
        return;
    }
    for (i, record) in records.iter().enumerate() {
        println!(
            "{}. {} ({}, {} bytes, modified {})",
            i + 1,
            record.name,
            record.file_type,
            record.size,
            record.modified.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 list                       show all tracked files in order\n\
         \x20 create <name> [position]   create a file and track it\n\
         \x20 read <name>                read from the store and sync the snapshot\n\
         \x20 show <name>                print the in-memory snapshot\n\
         \x20 append <name> <text>       append a line to a file\n\
         \x20 write <name> <text>        overwrite a file\n\
         \x20 delete <name>              delete a file by name\n\
         \x20 delete-at <position>       delete the file at a position\n\
         \x20 delete-all                 delete every tracked file\n\
         \x20 rename <old> <new>         rename a file\n\
         \x20 touch <name>               restamp a file's metadata\n\
         \x20 stats <name>               show statistics for a file\n\
         \x20 find <name>                exact-name search\n\
         \x20 sort <name|size|modified>  reorder the registry\n\
         \x20 prefix [p]                 search names by prefix\n\
         \x20 grep <text>                search content for a substring\n\
         \x20 type <category>            search by file type\n\
         \x20 range <min> <max>          search by size range (bytes)\n\
         \x20 quit                       exit"
    );
}
