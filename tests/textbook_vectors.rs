//! Known-answer tests against published textbook vectors.
//!
//! All expected values come from standard references for each cipher; any
//! change in output indicates a regression in the transform or the key
//! scheduler.
//!
//! Coverage:
//! - Caesar, Affine, Vigenère, Playfair, Hill through the public API
//! - `key::PlayfairGrid` layout
//! - `key::HillKey` inverse
//! - trace shape per cipher

use classicrypt::config::PlayfairOptions;
use classicrypt::key::{HillKey, PlayfairGrid, VigenereKey};
use classicrypt::{decode, encode, CipherKind, KeyParams, StepDetail};

// ═══════════════════════════════════════════════════════════════════════
// Caesar
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_hello_shift_3() {
    let key = KeyParams::Caesar { shift: 3 };
    assert_eq!(encode(CipherKind::Caesar, "HELLO", &key).unwrap().output, "KHOOR");
    assert_eq!(decode(CipherKind::Caesar, "KHOOR", &key).unwrap().output, "HELLO");
}

#[test]
fn caesar_negative_shift_equals_complement() {
    let minus = KeyParams::Caesar { shift: -3 };
    let plus = KeyParams::Caesar { shift: 23 };
    let a = encode(CipherKind::Caesar, "Veni, vidi, vici", &minus).unwrap();
    let b = encode(CipherKind::Caesar, "Veni, vidi, vici", &plus).unwrap();
    assert_eq!(a.output, b.output);
    assert_eq!(a.output, "Sbkf, sfaf, sfzf");
}

// ═══════════════════════════════════════════════════════════════════════
// Affine
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn affine_5_8_affinecipher() {
    let key = KeyParams::Affine { a: 5, b: 8 };
    assert_eq!(
        encode(CipherKind::Affine, "AFFINECIPHER", &key).unwrap().output,
        "IHHWVCSWFRCP"
    );
    assert_eq!(
        decode(CipherKind::Affine, "IHHWVCSWFRCP", &key).unwrap().output,
        "AFFINECIPHER"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Vigenère
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn vigenere_lemon_attack_at_dawn() {
    let key = KeyParams::Vigenere {
        key: "LEMON".into(),
    };
    let result = encode(CipherKind::Vigenere, "ATTACKATDAWN", &key).unwrap();
    assert_eq!(result.output, "LXFOPVEFRNHR");
    assert_eq!(result.trace.len(), 12);
}

#[test]
fn vigenere_trace_skips_punctuation() {
    let key = KeyParams::Vigenere {
        key: "lemon".into(),
    };
    let result = encode(CipherKind::Vigenere, "Attack at dawn!", &key).unwrap();
    assert_eq!(result.output, "Lxfopv ef rnhr!");
    assert_eq!(result.trace.len(), 12);
    assert_eq!(
        result.trace.steps()[0].description,
        "Character 'A' (0) + Key 'L' (11) = (0 + 11) mod 26 = 11 → 'L'"
    );
}

#[test]
fn vigenere_key_stream_display() {
    let key = VigenereKey::new("LEMON").unwrap();
    assert_eq!(key.key_stream("ATTACK AT DAWN"), "LEMONL EM ONLE");
}

// ═══════════════════════════════════════════════════════════════════════
// Playfair
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn playfair_monarchy_grid() {
    let grid = PlayfairGrid::new("MONARCHY", &PlayfairOptions::default()).unwrap();
    let flat: String = grid.rows().iter().flatten().collect();
    assert_eq!(flat, "MONARCHYBDEFGIKLPQSTUVWXZ");
}

#[test]
fn playfair_example_treasure_chest() {
    let key = KeyParams::Playfair {
        key: "PLAYFAIREXAMPLE".into(),
    };
    let result = encode(CipherKind::Playfair, "HIDETHEGOLDINTHETREASURECHEST", &key).unwrap();
    assert_eq!(result.output, "BMODZBXDNABEKUDMUIDENZEXDBMOWI");
    assert_eq!(result.trace.len(), 16);
    assert_eq!(
        result.trace.steps()[0].description,
        "Prepared text: HIDETHEGOLDINTHETREASURECHESTX"
    );
}

#[test]
fn playfair_example_tree_stump() {
    let key = KeyParams::Playfair {
        key: "playfair example".into(),
    };
    let result = encode(CipherKind::Playfair, "hide the gold in the tree stump", &key).unwrap();
    assert_eq!(result.output, "BMODZBXDNABEKUDMUIXMMOUVIF");
}

#[test]
fn playfair_trace_has_grid_coordinates() {
    let key = KeyParams::Playfair {
        key: "PLAYFAIREXAMPLE".into(),
    };
    let result = encode(CipherKind::Playfair, "HI", &key).unwrap();
    assert_eq!(result.trace.len(), 2);
    match &result.trace.steps()[1].detail {
        StepDetail::Digraph {
            input,
            positions,
            output,
            ..
        } => {
            assert_eq!(input, &['H', 'I']);
            assert_eq!(positions, &[(2, 4), (1, 0)]);
            assert_eq!(output, &['B', 'M']);
        }
        other => panic!("unexpected detail {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Hill
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn hill_2x2_help() {
    let key = KeyParams::Hill {
        matrix: vec![vec![3, 3], vec![2, 5]],
    };
    assert_eq!(encode(CipherKind::Hill, "HELP", &key).unwrap().output, "HIAT");
    assert_eq!(decode(CipherKind::Hill, "HIAT", &key).unwrap().output, "HELP");
}

#[test]
fn hill_3x3_gybnqkurp() {
    let key = KeyParams::Hill {
        matrix: vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]],
    };
    let result = encode(CipherKind::Hill, "ACT", &key).unwrap();
    assert_eq!(result.output, "POH");
    assert_eq!(result.trace.len(), 1);
}

#[test]
fn hill_inverse_matrix() {
    let key = HillKey::new(&[vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]).unwrap();
    assert_eq!(
        key.inverse(),
        &[vec![8u8, 5, 10], vec![21, 8, 21], vec![21, 12, 8]]
    );
}
