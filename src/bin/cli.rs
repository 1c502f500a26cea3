//! commnet CLI tool
//!
//! Runs the message transforms from the command line and walks through a
//! demo network.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::{Parser, Subcommand};
use commnet::{
    KeyPair, MessageBody, Network, NetworkConfig, Person, RunLength, SpectralCompressor,
};
use std::fs;
use std::path::{Path, PathBuf};

/// commnet: message transforms over a small contact network
#[derive(Parser)]
#[command(name = "commnet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON network config
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run-length encode a string
    RleEncode {
        /// Text to encode
        text: String,
    },

    /// Decode a run-length encoded string
    RleDecode {
        /// Encoded text
        encoded: String,
    },

    /// Spectrally compress a string
    Fft {
        /// Text to compress
        text: String,

        /// Fraction of frequency bins to keep, in (0, 1]
        #[arg(short, long)]
        ratio: Option<f64>,
    },

    /// Generate a key pair and write it as PEM files
    Keygen {
        /// Output path prefix (writes <prefix>.pub.pem and <prefix>.key.pem)
        #[arg(short, long, default_value = "commnet")]
        output: PathBuf,
    },

    /// Run interactive demo showing all transforms
    Demo,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::RleEncode { text } => cmd_rle_encode(&text),
        Commands::RleDecode { encoded } => cmd_rle_decode(&encoded),
        Commands::Fft { text, ratio } => {
            cmd_fft(&text, ratio.unwrap_or(config.default_compression_ratio))
        }
        Commands::Keygen { output } => cmd_keygen(&config, &output),
        Commands::Demo => cmd_demo(config),
    }
}

fn load_config(path: Option<&Path>) -> NetworkConfig {
    let Some(path) = path else {
        return NetworkConfig::default();
    };
    NetworkConfig::from_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn cmd_rle_encode(text: &str) {
    if text.chars().any(|c| c.is_ascii_digit()) {
        eprintln!("Warning: digits in the input will not decode back correctly");
    }
    println!("{}", RunLength::encode(text));
}

fn cmd_rle_decode(encoded: &str) {
    match RunLength::decode(encoded) {
        Ok(decoded) => println!("{}", decoded),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_fft(text: &str, ratio: f64) {
    let compressor = SpectralCompressor::new(ratio).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("Ratio:      {}", ratio);
    println!("Cutoff bin: {}", compressor.cutoff(text.chars().count()));
    println!("Original:   {:?}", text);
    println!("Compressed: {:?}", compressor.compress(text));
}

fn cmd_keygen(config: &NetworkConfig, prefix: &Path) {
    let keys = KeyPair::generate_with_bits(config.key_bits).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let public_path = prefix.with_extension("pub.pem");
    let private_path = prefix.with_extension("key.pem");

    for (path, bytes) in [(&public_path, keys.public_key()), (&private_path, keys.private_key())] {
        fs::write(path, bytes).unwrap_or_else(|e| {
            eprintln!("Error writing {:?}: {}", path, e);
            std::process::exit(1);
        });
    }

    println!("Key pair generated ({} bits)", config.key_bits);
    println!("Public key:  {:?}", public_path);
    println!("Private key: {:?}", private_path);
    println!();
    println!("IMPORTANT: Keep the private key file secret!");
}

fn cmd_demo(config: NetworkConfig) {
    println!("=== commnet Demo ===");
    println!();
    println!("This demo shows the complete flow of:");
    println!("1. Network setup");
    println!("2. Run-length compression");
    println!("3. Spectral compression");
    println!("4. Encrypted messaging");
    println!("5. Signed messaging");
    println!();

    if let Err(e) = run_demo(config) {
        eprintln!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run_demo(config: NetworkConfig) -> commnet::NetworkResult<()> {
    // Step 1: Build the network
    println!("--- Step 1: Network Setup ---");
    let mut network = Network::with_config(config);
    let alice_keys = network.generate_key_pair()?;
    let bob_keys = network.generate_key_pair()?;

    network.add_person(Person::with_keys("alice", &alice_keys));
    network.add_person(Person::with_keys("bob", &bob_keys));
    network.add_person(Person::new("charlie"));
    network.add_connection("alice", "bob")?;
    network.add_connection("bob", "charlie")?;

    let path: Vec<String> = network
        .get_path("alice", "charlie")
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Registered: alice, bob (keyed), charlie");
    println!("Route alice -> charlie: {}", path.join(" -> "));
    println!();

    // Step 2: Run-length
    println!("--- Step 2: Run-length Compression ---");
    let message = network.send_rle("alice", "bob", "WWWWWWWWWWWWBWWWWWWWWWWWWBBB")?;
    println!("Encoded body: {}", message.body.as_text().unwrap_or_default());
    println!("Bob decodes:  {}", network.receive_rle(&message)?);
    println!();

    // Step 3: Spectral
    println!("--- Step 3: Spectral Compression ---");
    let body = "This is a test message for compression ratios.";
    for ratio in [0.9, 0.5, 0.1] {
        let message = network.send_fft("alice", "charlie", body, ratio)?;
        println!("ratio {:.1}: {:?}", ratio, message.body.as_text().unwrap_or_default());
    }
    println!();

    // Step 4: Encryption
    println!("--- Step 4: Encrypted Messaging ---");
    let message = network.send_encrypted("alice", "bob", "This is a secret message!")?;
    if let MessageBody::Binary(ciphertext) = &message.body {
        println!("Ciphertext (base64): {}...", &BASE64.encode(ciphertext)[..40]);
    }
    println!("Bob decrypts: \"{}\"", network.receive_encrypted(&message)?);
    println!();

    // Step 5: Signatures
    println!("--- Step 5: Signed Messaging ---");
    let mut message = network.send_signed("alice", "bob", "Hello, Bob! This is a signed message.")?;
    println!("Signature valid: {}", network.verify_signed(&message));

    let confirmation = network.confirm_signed(&message)?;
    println!("Bob confirms to {}: {}", confirmation.receiver, confirmation.message_type());

    message.body = MessageBody::from("Hello, Bob! Send money to Eve.");
    println!("After tampering, signature valid: {}", network.verify_signed(&message));
    println!();

    println!("Demo complete.");
    Ok(())
}
