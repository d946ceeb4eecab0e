use std::{env, fs, process};

use letc::{parser::parser::parse, print_error};

fn print_usage(program: &str) {
    println!("USAGE: {} <path_to_file>", program);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        return;
    }

    let path = &args[1];
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Could not open file at {}: {}", path, err);
            process::exit(1);
        }
    };

    println!("Contents of {}:\n---\n\"{}\"\n---", path, contents);

    match parse(&contents) {
        Ok(tree) => print!("{}", tree),
        Err(err) => {
            print_error(&err);
            process::exit(1);
        }
    }
}
