use std::io::Write as _;

use age::secrecy::{ExposeSecret, SecretString};
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run jaeger with a clean passphrase environment.
fn jaeger() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("jaeger");
    cmd.env_remove("JAEGER_PASSPHRASE");
    cmd
}

/// Plaintext keyring body for a fresh identity.
fn keyring_body() -> String {
    let identity = age::x25519::Identity::generate();
    format!(
        "{}\n{}\n",
        identity.to_public(),
        identity.to_string().expose_secret()
    )
}

/// Age-encrypt a keyring body with a passphrase (low work factor to
/// keep the suite fast).
fn lock_keyring(body: &str, passphrase: &str) -> Vec<u8> {
    let mut recipient = age::scrypt::Recipient::new(SecretString::from(passphrase.to_owned()));
    recipient.set_work_factor(2);

    let encryptor =
        age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
            .unwrap();

    let mut output = Vec::new();
    let mut writer = encryptor.wrap_output(&mut output).unwrap();
    writer.write_all(body.as_bytes()).unwrap();
    writer.finish().unwrap();
    output
}

/// Init a store and seal the given name/value pairs into it.
fn populate(dir: &assert_fs::TempDir, keyring: &std::path::Path, pairs: &[(&str, &str)]) {
    jaeger()
        .current_dir(dir.path())
        .args(["init", "app.conf.jgrdb"])
        .assert()
        .success();

    for (name, value) in pairs {
        jaeger()
            .current_dir(dir.path())
            .args(["add", "app.conf.jgrdb", name, value, "--keyring"])
            .arg(keyring)
            .assert()
            .success();
    }
}

// ─── End-to-end render ───────────────────────────────────────────

#[test]
fn renders_template_with_decrypted_values_exactly() {
    let dir = assert_fs::TempDir::new().unwrap();
    let keyring = dir.child("keyring.txt");
    keyring.write_str(&keyring_body()).unwrap();

    populate(
        &dir,
        keyring.path(),
        &[("Name", "admin"), ("DB_PASSWORD", "s3cret")],
    );

    dir.child("app.conf.jgrt")
        .write_str("user={{Name}}\npass={{DB_PASSWORD}}\n")
        .unwrap();

    jaeger()
        .current_dir(dir.path())
        .args([
            "render",
            "app.conf.jgrt",
            "app.conf.jgrdb",
            "app.conf",
            "--keyring",
        ])
        .arg(keyring.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered to app.conf"));

    let rendered = std::fs::read_to_string(dir.child("app.conf").path()).unwrap();
    assert_eq!(rendered, "user=admin\npass=s3cret\n");
}

#[test]
fn render_derives_store_and_output_from_jgrt_extension() {
    let dir = assert_fs::TempDir::new().unwrap();
    let keyring = dir.child("keyring.txt");
    keyring.write_str(&keyring_body()).unwrap();

    populate(&dir, keyring.path(), &[("Port", "5432")]);

    dir.child("app.conf.jgrt")
        .write_str("port={{Port}}\n")
        .unwrap();

    // No store or output arguments: the .jgrt base name decides both.
    jaeger()
        .current_dir(dir.path())
        .args(["render", "app.conf.jgrt", "--keyring"])
        .arg(keyring.path())
        .assert()
        .success();

    dir.child("app.conf").assert("port=5432\n");
}

#[test]
fn render_fails_on_placeholder_missing_from_store() {
    let dir = assert_fs::TempDir::new().unwrap();
    let keyring = dir.child("keyring.txt");
    keyring.write_str(&keyring_body()).unwrap();

    populate(&dir, keyring.path(), &[("Name", "admin")]);

    dir.child("app.conf.jgrt")
        .write_str("user={{Name}}\npass={{DB_PASSWORD}}\n")
        .unwrap();

    jaeger()
        .current_dir(dir.path())
        .args(["render", "app.conf.jgrt", "--keyring"])
        .arg(keyring.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("DB_PASSWORD"));

    // Fail-fast: no partial output file.
    dir.child("app.conf").assert(predicate::path::missing());
}

#[test]
fn render_allow_missing_substitutes_empty_strings() {
    let dir = assert_fs::TempDir::new().unwrap();
    let keyring = dir.child("keyring.txt");
    keyring.write_str(&keyring_body()).unwrap();

    populate(&dir, keyring.path(), &[("Name", "admin")]);

    dir.child("app.conf.jgrt")
        .write_str("user={{Name}}\npass={{DB_PASSWORD}}\n")
        .unwrap();

    jaeger()
        .current_dir(dir.path())
        .args(["render", "app.conf.jgrt", "--allow-missing", "--keyring"])
        .arg(keyring.path())
        .assert()
        .success();

    dir.child("app.conf").assert("user=admin\npass=\n");
}

// ─── Passphrase-protected keyrings ───────────────────────────────

#[test]
fn render_unlocks_protected_keyring_with_passphrase_flag() {
    let dir = assert_fs::TempDir::new().unwrap();

    // Seal with a plaintext copy of the keyring, then lock it.
    let body = keyring_body();
    let plain = dir.child("plain.txt");
    plain.write_str(&body).unwrap();

    populate(&dir, plain.path(), &[("Token", "abc123")]);

    let locked = dir.child("locked.txt");
    locked.write_binary(&lock_keyring(&body, "drift compatible")).unwrap();

    dir.child("app.conf.jgrt")
        .write_str("token={{Token}}\n")
        .unwrap();

    jaeger()
        .current_dir(dir.path())
        .args([
            "render",
            "app.conf.jgrt",
            "--keyring",
        ])
        .arg(locked.path())
        .args(["--passphrase", "drift compatible"])
        .assert()
        .success();

    dir.child("app.conf").assert("token=abc123\n");
}

#[test]
fn render_reads_passphrase_from_environment() {
    let dir = assert_fs::TempDir::new().unwrap();

    let body = keyring_body();
    let plain = dir.child("plain.txt");
    plain.write_str(&body).unwrap();

    populate(&dir, plain.path(), &[("Token", "abc123")]);

    let locked = dir.child("locked.txt");
    locked.write_binary(&lock_keyring(&body, "from-env")).unwrap();

    dir.child("app.conf.jgrt")
        .write_str("token={{Token}}\n")
        .unwrap();

    jaeger()
        .current_dir(dir.path())
        .env("JAEGER_PASSPHRASE", "from-env")
        .args(["render", "app.conf.jgrt", "--keyring"])
        .arg(locked.path())
        .assert()
        .success();

    dir.child("app.conf").assert("token=abc123\n");
}

#[test]
fn wrong_passphrase_fails_before_any_rendering() {
    let dir = assert_fs::TempDir::new().unwrap();

    let body = keyring_body();
    let plain = dir.child("plain.txt");
    plain.write_str(&body).unwrap();

    populate(&dir, plain.path(), &[("Token", "abc123")]);

    let locked = dir.child("locked.txt");
    locked.write_binary(&lock_keyring(&body, "correct")).unwrap();

    dir.child("app.conf.jgrt")
        .write_str("token={{Token}}\n")
        .unwrap();

    jaeger()
        .current_dir(dir.path())
        .args(["render", "app.conf.jgrt", "--keyring"])
        .arg(locked.path())
        .args(["--passphrase", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unlock"));

    dir.child("app.conf").assert(predicate::path::missing());
}

#[test]
fn render_with_recipient_only_keyring_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    let identity = age::x25519::Identity::generate();
    let full = dir.child("full.txt");
    full.write_str(&format!(
        "{}\n{}\n",
        identity.to_public(),
        identity.to_string().expose_secret()
    ))
    .unwrap();

    populate(&dir, full.path(), &[("Token", "abc123")]);

    // Public half only: sealing works, opening cannot.
    let public_only = dir.child("public.txt");
    public_only
        .write_str(&format!("{}\n", identity.to_public()))
        .unwrap();

    dir.child("app.conf.jgrt")
        .write_str("token={{Token}}\n")
        .unwrap();

    jaeger()
        .current_dir(dir.path())
        .args(["render", "app.conf.jgrt", "--keyring"])
        .arg(public_only.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no private key material"));
}
