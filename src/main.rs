use basex::{hex, Codec, Configuration, Error, Logger};
use serde::Serialize;
use serde_json::{json, Value};
use std::{env, process};

const USAGE: &str = "Usage: basex <encode|decode|encode-hex|decode-hex|alphabet> [value...]";

#[derive(Serialize)]
struct Output<'a> {
    input: &'a str,
    output: String,
}

#[derive(Serialize)]
struct Failure<'a> {
    input: &'a str,
    message: String,
}

fn run(command: &str, input: &str, codec: &Codec) -> Result<String, Error> {
    match command {
        "encode" => Ok(codec.encode_decimal(input)?),
        "decode" => Ok(codec.decode_to_decimal(input)?),
        "encode-hex" => Ok(codec.encode_bytes(hex::decode(input)?)),
        "decode-hex" => Ok(hex::encode(codec.decode_to_bytes(input)?)),
        _ => Err(Error::new(format!("Unknown command {}\n{}", command, USAGE))),
    }
}

/// Runs `command` over every input. Returns one JSON line per input and the exit code: 1 when any input failed.
fn execute<'a>(command: &str, inputs: impl IntoIterator<Item = &'a str>, codec: &Codec, logger: &Logger) -> (Vec<Value>, i32) {
    if command == "alphabet" {
        return (vec![json!({ "alphabet": codec.alphabet() })], 0);
    }

    let mut lines = Vec::new();
    let mut code = 0;
    for input in inputs {
        match run(command, input, codec) {
            Ok(output) => lines.push(json!(Output { input, output })),
            Err(error) => {
                code = 1;
                lines.push(json!(Failure {
                    input,
                    message: error.to_string()
                }));
            }
        }
        logger.log(format!("{} {}", command, input));
    }
    (lines, code)
}

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(2);
        }
    };

    let logger = Logger::new(configuration.verbose());
    let codec = configuration.codec();
    if configuration.key().is_some() {
        logger.log("Using keyed alphabet");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let (command, inputs) = match args.split_first() {
        Some((command, inputs)) => (command.as_str(), inputs),
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let (lines, code) = execute(command, inputs.iter().map(String::as_str), &codec, &logger);
    for line in lines {
        println!("{}", line);
    }
    if code != 0 {
        process::exit(code);
    }
}
