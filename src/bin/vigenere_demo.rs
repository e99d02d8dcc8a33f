// vigenere_demo.rs
// Drives the full cipher surface: table, key derivation, encrypt, decrypt.
// Mirrors the self-test driver of the original Java implementation.

use vigenere::{VigenereCipher, VigenereError};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), VigenereError> {
    let cipher = VigenereCipher::new();

    let message = "MICHIGANTECHNOLOGICALUNIVERSITY";
    let key = cipher.generate_key("HOUGHTON", message.len() as i32)?;
    let encrypted = cipher.encrypt(&key, message)?;
    let decrypted = cipher.decrypt(&key, &encrypted)?;

    println!("=== Vigenère Table ===");
    print!("{}", cipher.table());

    println!("Message  : {}", message);
    println!("Key      : {}", key);
    println!("Cipher   : {}", encrypted);
    println!("Decrypted: {}", decrypted);

    Ok(())
}
