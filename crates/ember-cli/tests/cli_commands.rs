//! End-to-end tests for the `ember` command layer
//!
//! Arguments go through clap exactly as on the command line; stdin and stdout
//! are in-memory buffers.

use std::io::Write;

use clap::Parser;
use ember_cli::{Cli, CliError, Outcome, run};
use ember_crypto::CryptoError;

const RFC4231_KEY: &str = "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b";
const RFC4231_TAG: &str = "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7";

const ALICE_SECRET: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
const ALICE_PUBLIC: &str = "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
const BOB_PUBLIC: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
const SHARED: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

fn execute(args: &[&str], stdin: &[u8]) -> (Result<Outcome, CliError>, String) {
    let cli = Cli::try_parse_from(std::iter::once("ember").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let result = run(&cli.command, stdin, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn tag_from_message_flag() {
    let (result, out) = execute(&["tag", "--key", RFC4231_KEY, "--message", "Hi There"], b"");
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out.trim(), RFC4231_TAG);
}

#[test]
fn tag_from_stdin() {
    let (result, out) = execute(&["tag", "--key", RFC4231_KEY], b"Hi There");
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out.trim(), RFC4231_TAG);
}

#[test]
fn tag_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Hi There").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let (result, out) = execute(&["tag", "--key", RFC4231_KEY, "--file", &path], b"ignored");
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out.trim(), RFC4231_TAG);
}

#[test]
fn message_and_file_conflict() {
    let args = ["ember", "tag", "--key", "00", "--message", "a", "--file", "b"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn verify_match_and_mismatch() {
    let (result, out) = execute(
        &["verify", "--key", RFC4231_KEY, "--tag", RFC4231_TAG, "--message", "Hi There"],
        b"",
    );
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out.trim(), "ok");

    let (result, out) = execute(
        &["verify", "--key", RFC4231_KEY, "--tag", RFC4231_TAG, "--message", "Hi there"],
        b"",
    );
    assert_eq!(result.unwrap(), Outcome::Mismatch);
    assert_eq!(out.trim(), "mismatch");
}

#[test]
fn verify_short_tag_is_an_error() {
    let (result, out) =
        execute(&["verify", "--key", RFC4231_KEY, "--tag", "b0344c61", "--message", "x"], b"");
    assert!(matches!(
        result,
        Err(CliError::Crypto(CryptoError::InvalidLength { what: "tag", actual: 4, .. }))
    ));
    assert!(out.is_empty());
}

#[test]
fn empty_key_is_rejected() {
    let (result, _) = execute(&["tag", "--key", "", "--message", "x"], b"");
    assert!(matches!(result, Err(CliError::Crypto(CryptoError::InvalidKey { .. }))));
}

#[test]
fn bad_hex_is_rejected() {
    let (result, _) = execute(&["tag", "--key", "not-hex", "--message", "x"], b"");
    assert!(matches!(result, Err(CliError::Hex { field: "key", .. })));
}

#[test]
fn public_key_and_shared_secret() {
    let (result, out) = execute(&["public-key", "--scalar", ALICE_SECRET], b"");
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out.trim(), ALICE_PUBLIC);

    let (result, out) =
        execute(&["shared-secret", "--scalar", ALICE_SECRET, "--point", BOB_PUBLIC], b"");
    assert_eq!(result.unwrap(), Outcome::Success);
    assert_eq!(out.trim(), SHARED);
}

#[test]
fn degenerate_inputs_are_rejected() {
    let zero = "00".repeat(32);

    let (result, _) = execute(&["public-key", "--scalar", &zero], b"");
    assert!(matches!(result, Err(CliError::Crypto(CryptoError::DegenerateKey))));

    let (result, _) =
        execute(&["shared-secret", "--scalar", ALICE_SECRET, "--point", &zero], b"");
    assert!(matches!(result, Err(CliError::Crypto(CryptoError::DegenerateKey))));
}

#[test]
fn log_level_is_global() {
    let cli =
        Cli::try_parse_from(["ember", "public-key", "--scalar", ALICE_SECRET, "--log-level", "debug"])
            .unwrap();
    assert_eq!(cli.log_level, "debug");
}
