//! Generates a P-256 key pair, encrypts a short message to it, decrypts it
//! back, and prints both sides.

use ecc::{Curve, KeyPair, Options};
use rand::rngs::OsRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = OsRng;
    let options = Options::default();

    let pair = KeyPair::generate(Curve::P256, &mut rng)?;

    let message = b"Test must have worked";
    let ciphertext = pair.public.encrypt(message, &options, &mut rng)?;
    let plaintext = pair.private.decrypt(&ciphertext, Curve::P256, &options)?;

    if plaintext != message {
        return Err("messages do not match".into());
    }

    println!("Cipher text: {}", hex::encode(&ciphertext));
    println!("Plain text: {}", String::from_utf8_lossy(&plaintext));
    Ok(())
}
