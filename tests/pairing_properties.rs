use std::collections::HashSet;

use nomina::analysis::normalizer::Normalizer;
use nomina::analysis::policy::NameKind;
use nomina::error::Result;
use nomina::pairing::{match_name_pairs, match_name_pairs_scored};
use nomina::similarity::similarity;

const SAMPLE_NAMES: &[&str] = &[
    "John Paul",
    "Quitéria Da Conceição",
    "de Ochoa de Gutierrez",
    "Garcia O Ochoa",
    "Sir Jones King",
    "D X Jones",
    "mendoza y gutierres",
    "Van der Leek",
    "Смирнов",
    "王李",
    "Νίκος Παπαδόπουλος",
    "O'Brien-Smith",
    "1st john",
    "0 1 2 3",
    "Mary Ann St John",
    "O.Brien",
    "\u{ff2a}\u{ff4f}\u{ff48}\u{ff4e} Gri\u{fb03}n",
    "김민준",
    "محمد بن علي",
];

fn pieces(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn canonical_form_is_a_fixed_point() -> Result<()> {
    let normalizer = Normalizer::with_defaults()?;

    for kind in [NameKind::GivenName, NameKind::Surname] {
        for raw in SAMPLE_NAMES {
            let once = normalizer.normalize(raw, kind, false);
            let twice = normalizer.normalize(&once.join(" "), kind, false);
            assert_eq!(once, twice, "{raw:?} ({kind}) is not a fixed point");
        }
    }
    Ok(())
}

#[test]
fn similarity_is_bounded_reflexive_and_symmetric() {
    let words = ["", "john", "jan", "smith", "smyth", "smythe", "brown", "oochoa", "ochoa"];

    for a in words {
        assert_eq!(similarity(a, a), 1.0);
        for b in words {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a:?} {b:?} scored {score}");
            assert_eq!(score, similarity(b, a));
        }
    }
    assert_eq!(similarity("smith", "smyth"), 0.8);
    assert_eq!(similarity("john", "jan"), 0.5);
}

#[test]
fn pairs_are_disjoint_and_ordered() -> Result<()> {
    let normalizer = Normalizer::with_defaults()?;

    for name in SAMPLE_NAMES {
        for alt in SAMPLE_NAMES {
            let name_pieces = normalizer.normalize(name, NameKind::GivenName, false);
            let alt_pieces = normalizer.normalize(alt, NameKind::GivenName, false);
            let pairs = match_name_pairs_scored(&name_pieces, &alt_pieces);

            assert_eq!(pairs.len(), name_pieces.len().min(alt_pieces.len()));
            assert!(pairs.windows(2).all(|w| w[0].score >= w[1].score));

            let mut used_name = HashSet::new();
            let mut used_alt = HashSet::new();
            for pair in &pairs {
                let name_index = name_pieces
                    .iter()
                    .enumerate()
                    .position(|(i, p)| p == &pair.name_piece && !used_name.contains(&i));
                let alt_index = alt_pieces
                    .iter()
                    .enumerate()
                    .position(|(i, p)| p == &pair.alt_piece && !used_alt.contains(&i));
                assert!(name_index.is_some() && alt_index.is_some());
                used_name.extend(name_index);
                used_alt.extend(alt_index);
            }
        }
    }
    Ok(())
}

#[test]
fn pairing_follows_best_match_first() {
    let pairs = match_name_pairs(&pieces(&["john", "smith"]), &pieces(&["jan", "smythe", "brown"]));
    assert_eq!(
        pairs,
        vec![
            ("smith".to_string(), "smythe".to_string()),
            ("john".to_string(), "jan".to_string()),
        ]
    );

    assert!(match_name_pairs(&[], &pieces(&["john"])).is_empty());
}

#[test]
fn prefix_merge_conserves_characters() -> Result<()> {
    let normalizer = Normalizer::with_defaults()?;
    let inputs: &[&[&str]] = &[
        &["van", "der", "leek"],
        &["mendoza", "gutierres", "de", "la"],
        &["de", "la", "de", "los", "santos"],
        &["della"],
        &["smith"],
        &[],
    ];

    for input in inputs {
        let merged = normalizer.merge_surname_prefixes(&pieces(input));
        assert_eq!(merged.concat(), input.concat(), "characters changed for {input:?}");
        assert!(merged.iter().all(|p| !p.is_empty()));
    }
    Ok(())
}

#[test]
fn noise_removal_never_empties_a_sequence() -> Result<()> {
    let normalizer = Normalizer::with_defaults()?;
    let inputs: &[&[&str]] = &[
        &["sir"],
        &["y"],
        &["ui", "ua"],
        &["dr", "y", "sir"],
        &["king", "queen"],
    ];

    for kind in [NameKind::GivenName, NameKind::Surname] {
        for input in inputs {
            let kept = normalizer.remove_noise_words(&pieces(input), kind);
            assert!(!kept.is_empty(), "{input:?} ({kind}) was emptied");
        }
    }
    Ok(())
}
