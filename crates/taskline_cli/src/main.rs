use clap::Parser;
use std::io::{self, BufRead};
use taskline_cli::cli::Cli;
use taskline_core::error::AppError;
use taskline_core::list::TaskList;
use taskline_core::parser;
use taskline_core::storage::Storage;

const HORIZONTAL_LINE: &str = "____________________________________________________________";

const LOGO: &str = concat!(
    " _            _    _ _\n",
    "| |_ __ _ ___| | _| (_)_ __   ___\n",
    "| __/ _` / __| |/ /| | | '_ \\ / _ \\\n",
    "| || (_| \\__ \\   < | | | | | |  __/\n",
    " \\__\\__,_|___/_|\\_\\|_|_|_| |_|\\___|\n",
);

const MESSAGE_LOAD_FAILED: &str =
    "Error loading data from hard disk...\nDefaulting to fresh state...";

fn indent(text: &str) -> String {
    format!("\t{}", text.replace('\n', "\n\t"))
}

fn space(text: &str) -> String {
    format!(" {}", text.replace('\n', "\n "))
}

fn show_framed(message: &str) {
    println!("{}", indent(HORIZONTAL_LINE));
    println!("{}", indent(&space(message)));
    println!("{}", indent(HORIZONTAL_LINE));
    println!();
}

fn show_welcome() {
    show_framed(&format!("Hello I'm\n{LOGO}\nWhat can I do for you?"));
}

fn print_result_json(result: &Result<String, AppError>, tasks: &TaskList) {
    let json = match result {
        Ok(response) => serde_json::json!({
            "ok": true,
            "response": response,
            "tasks": tasks,
        }),
        Err(err) => serde_json::json!({
            "ok": false,
            "code": err.code(),
            "message": err.message(),
            "tasks": tasks,
        }),
    };
    println!("{json}");
}

fn execute_line(line: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String, AppError> {
    parser::parse_command(line)?.execute(tasks, storage)
}

fn run_one_shot(cli: &Cli, tasks: &mut TaskList, storage: &Storage) -> i32 {
    let line = cli.command.join(" ");
    let result = execute_line(&line, tasks, storage);

    if cli.json {
        print_result_json(&result, tasks);
        return if result.is_ok() { 0 } else { 1 };
    }

    match result {
        Ok(response) => {
            if cli.plain {
                println!("{response}");
            } else {
                show_framed(&response);
            }
            0
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            1
        }
    }
}

fn run_interactive(cli: &Cli, tasks: &mut TaskList, storage: &Storage) -> Result<(), AppError> {
    if !cli.plain && !cli.json {
        show_welcome();
    }

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();
    let mut is_exit = false;

    while !is_exit {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| AppError::load(err.to_string()))?;
        if bytes == 0 {
            break;
        }

        let result = match parser::parse_command(&input) {
            Ok(command) => {
                is_exit = command.is_exit();
                command.execute(tasks, storage)
            }
            Err(err) => Err(err),
        };

        if cli.json {
            print_result_json(&result, tasks);
            continue;
        }

        match result {
            Ok(response) => {
                if cli.plain {
                    println!("{response}");
                } else {
                    show_framed(&response);
                }
            }
            Err(err) => {
                if cli.plain {
                    eprintln!("ERROR: {err}");
                } else {
                    show_framed(err.message());
                }
            }
        }
    }

    Ok(())
}

fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    match flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.log_to_stderr().start())
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("ERROR: failed to start logger: {err}");
            None
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let _logger = init_logging();

    let storage = match &cli.data_file {
        Some(path) => Storage::with_path(path.clone()),
        None => Storage::from_env(),
    };

    let mut tasks = TaskList::new();
    if let Err(err) = storage.load(&mut tasks) {
        log::warn!("discarding saved tasks: {err}");
        if cli.command.is_empty() && !cli.json {
            println!("{MESSAGE_LOAD_FAILED}");
        } else {
            eprintln!("{MESSAGE_LOAD_FAILED}");
        }
    }

    if !cli.command.is_empty() {
        std::process::exit(run_one_shot(&cli, &mut tasks, &storage));
    }

    if let Err(err) = run_interactive(&cli, &mut tasks, &storage) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
