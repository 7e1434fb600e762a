//! Fixed message sets for the gate sequences.

/// Boot log played once at startup.
pub const BOOT_SEQUENCE: [&str; 6] = [
    "[OK] BIOS checksum verified",
    "[OK] Bootloader decrypted",
    "[OK] Neural access bridge initialized",
    "[OK] Proxy tunnels established",
    "[OK] Identity hash resolved",
    "[WARN] Clearance level: REDACTED",
];

/// Sequence played after a correct passphrase, before navigation.
pub const ACCESS_GRANTED: [&str; 4] = [
    "ACCESS GRANTED",
    "DECRYPTING PAYLOAD...",
    "LOADING DOCUMENT MODULE",
    "REDIRECTING TO SECURE CHANNEL...",
];

/// Denial messages; one is picked at random per failed attempt.
pub const ACCESS_DENIED: [&str; 5] = [
    "ACCESS DENIED",
    "UNAUTHORIZED ATTEMPT LOGGED",
    "INVALID KEY SEQUENCE",
    "SECURITY PROTOCOL ENGAGED",
    "FINGERPRINT MISMATCH",
];
