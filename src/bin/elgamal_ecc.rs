use std::io::{self, Read};
use std::process::ExitCode;

use ecc_elgamal::{
    ElGamal, ElGamalConfig, EncryptConfig, EncryptedSymbol, MessageCipher, PointTable,
};

fn parse_args() -> Result<(Option<u64>, Vec<String>), String> {
    let mut seed = None;
    let mut words = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let value = args.next().ok_or("--seed needs a value")?;
            seed = Some(
                value
                    .parse::<u64>()
                    .map_err(|e| format!("bad seed {:?}: {}", value, e))?,
            );
        } else {
            words.push(arg);
        }
    }
    Ok((seed, words))
}

/// Command-line words joined by single spaces, so a space between arguments is kept
/// in the message and reported as an unmapped character.
fn message_from_args(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn read_message(words: Vec<String>) -> io::Result<String> {
    if let Some(message) = message_from_args(&words) {
        return Ok(message);
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input.split_whitespace().next().unwrap_or_default().to_string())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (seed, words) = parse_args()?;
    let message = read_message(words)?;

    let elgamal = ElGamal::new(&ElGamalConfig::default())?;
    let table = PointTable::build(elgamal.curve())?;
    let cipher = MessageCipher::new(&elgamal, &table);

    let k = elgamal.random_ephemeral(&EncryptConfig { seed });
    println!("Current k = {}", k);

    for (c, point) in cipher.mapped_points(&message) {
        match point {
            Some(point) => println!("'{}' => {}", c, point),
            None => println!("Character '{}' is not valid.", c),
        }
    }

    let encrypted = cipher.encrypt_message(&message, k)?;
    println!("C1: {}", encrypted.c1);
    let c2: Vec<String> = encrypted
        .symbols
        .iter()
        .map(|symbol| match symbol {
            EncryptedSymbol::Encrypted(point) => point.to_string(),
            EncryptedSymbol::Unmapped(c) => format!("'{}'", c),
        })
        .collect();
    println!("C2: {}", c2.join(" "));
    println!("Plain text: {}", cipher.decrypt_message(&encrypted)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
