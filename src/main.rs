//! Minimal binary demonstrating `packframe` usage.
//!
//! Packs text into frames or inspects hex-encoded frames.

mod cli;

use std::{error::Error, process::ExitCode};

use clap::Parser;
use packframe::{
    CapacityRule,
    FrameCodec,
    FrameConfig,
    RawPayload,
    frame::{HEADER_SIZE, try_decode_header},
    hexdump::show_hex,
};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    // Enable structured logging; library `log` records are bridged in.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "packframe failed");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String, Box<dyn Error>> {
    match command {
        Command::Pack {
            text,
            capacity,
            exact,
        } => pack(text, capacity, exact),
        Command::Inspect { hex } => inspect(&hex.concat()),
    }
}

fn pack(text: String, capacity: Option<usize>, exact: bool) -> Result<String, Box<dyn Error>> {
    let codec = FrameCodec::with_payload(RawPayload::from(text.into_bytes()));
    let Some(capacity) = capacity else {
        let frame = codec.pack_to_bytes()?;
        return Ok(show_hex(&frame));
    };

    let rule = if exact {
        CapacityRule::Exact
    } else {
        CapacityRule::ReserveTrailingByte
    };
    let codec = codec.with_config(FrameConfig::default().with_capacity_rule(rule));
    let mut buf = vec![0u8; capacity];
    let written = codec.pack_into_slice(&mut buf)?;
    tracing::debug!(written, capacity, "packed into fixed buffer");
    Ok(show_hex(&buf))
}

fn inspect(hex_digits: &str) -> Result<String, Box<dyn Error>> {
    let digits: String = hex_digits
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let bytes = hex::decode(digits)?;
    let announced = try_decode_header(&bytes)?;
    let body_len = bytes.len() - HEADER_SIZE;

    let codec = FrameCodec::with_payload(RawPayload::default());
    codec.unpack(&bytes)?;
    let body = match codec.get() {
        Some(handle) => {
            let payload = handle.borrow();
            payload.as_bytes().to_vec()
        }
        None => Vec::new(),
    };

    Ok(format!(
        "header: {announced}\nbody: {body_len} bytes\nhex: {}\ntext: {}",
        show_hex(&body),
        String::from_utf8_lossy(&body)
    ))
}
