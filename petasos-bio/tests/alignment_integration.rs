/// Integration tests for global and local alignment
use petasos_bio::alignment::{align, align_global, align_local, AlignedPair, GapModel};
use petasos_bio::scoring::ScoringTable;
use petasos_core::PetasosError;
use pretty_assertions::assert_eq;

fn match_mismatch(match_score: i32, mismatch: i32) -> ScoringTable {
    let alphabet = "ACGT";
    let mut text = format!("   {}\n", alphabet.chars().map(|c| format!("{:>3}", c)).collect::<String>());
    for a in alphabet.chars() {
        text.push(a);
        for b in alphabet.chars() {
            let score = if a == b { match_score } else { mismatch };
            text.push_str(&format!("{:>3}", score));
        }
        text.push('\n');
    }
    text.parse().unwrap()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<AlignedPair> {
    expected
        .iter()
        .map(|&(first, second)| AlignedPair::new(first, second))
        .collect()
}

#[test]
fn test_textbook_global_alignment() {
    let result = align_global("HEAGAWGHEE", "PAWHEAE", ScoringTable::blosum50(), 8).unwrap();

    assert_eq!(result.score, 1);
    assert_eq!(
        result.alignments,
        pairs(&[
            ("HEAGAWGHE-E", "--P-AW-HEAE"),
            ("HEAGAWGHE-E", "-P--AW-HEAE"),
            ("HEAGAWGHE-E", "-PA--W-HEAE"),
        ])
    );
}

#[test]
fn test_global_alignment_swapped_is_mirrored() {
    let forward = align_global("HEAGAWGHEE", "PAWHEAE", ScoringTable::blosum50(), 8).unwrap();
    let reverse = align_global("PAWHEAE", "HEAGAWGHEE", ScoringTable::blosum50(), 8).unwrap();

    assert_eq!(forward.score, reverse.score);
    let mirrored: Vec<AlignedPair> = reverse.iter().map(AlignedPair::swapped).collect();
    assert_eq!(forward.alignments, mirrored);
}

#[test]
fn test_textbook_local_alignment() {
    let result = align_local("HEAGAWGHEE", "PAWHEAE", ScoringTable::blosum50(), 10, 1).unwrap();

    assert_eq!(result.score, 26);
    assert_eq!(result.alignments, pairs(&[("AWGHE", "AW-HE")]));
}

#[test]
fn test_course_local_alignment() {
    let scoring = match_mismatch(2, -1);
    let result = align_local("ACACACTA", "AGCACACA", &scoring, 3, 1).unwrap();

    assert_eq!(result.score, 10);
    assert_eq!(
        result.alignments,
        pairs(&[("ACACA", "ACACA"), ("CACAC", "CACAC")])
    );
}

#[test]
fn test_local_gap_placement_ties() {
    let scoring = match_mismatch(2, -1);
    let result = align_local("ACGTACGT", "ACGTTACGT", &scoring, 2, 2).unwrap();

    assert_eq!(result.score, 14);
    assert_eq!(
        result.alignments,
        pairs(&[("ACG-TACGT", "ACGTTACGT"), ("ACGT-ACGT", "ACGTTACGT")])
    );
}

#[test]
fn test_local_multiple_maximal_cells() {
    let scoring = match_mismatch(2, -1);
    let result = align_local("GACGTTACGTAC", "ACGTACG", &scoring, 2, 2).unwrap();

    assert_eq!(result.score, 12);
    assert_eq!(
        result.alignments,
        pairs(&[
            ("ACGTTACG", "ACG-TACG"),
            ("ACGTTACG", "ACGT-ACG"),
            ("ACGTAC", "ACGTAC"),
        ])
    );
}

#[test]
fn test_free_gaps_in_local_mode() {
    let scoring = match_mismatch(2, -1);
    let result = align_local("CAGT", "CAT", &scoring, 0, 0).unwrap();

    assert_eq!(result.score, 6);
    assert_eq!(result.alignments, pairs(&[("CAGT", "CA-T")]));
}

#[test]
fn test_global_tie_at_single_cell() {
    let scoring = match_mismatch(2, -1);
    let result = align_global("AT", "CA", &scoring, 2).unwrap();

    assert_eq!(result.score, -2);
    assert_eq!(result.len(), 2);
    assert!(result.contains("AT", "CA"));
    assert!(result.contains("-AT", "CA-"));
}

#[test]
fn test_empty_sequence_global() {
    let result = align_global("", "PAWHE", ScoringTable::blosum62(), 4).unwrap();

    assert_eq!(result.score, -20);
    assert_eq!(result.alignments, pairs(&[("-----", "PAWHE")]));
}

#[test]
fn test_all_mismatch_local_is_empty() {
    let scoring = match_mismatch(2, -1);
    let result = align_local("AAAA", "TTTT", &scoring, 3, 1).unwrap();

    assert_eq!(result.score, 0);
    assert_eq!(result.alignments, vec![AlignedPair::default()]);
}

#[test]
fn test_dispatch_by_gap_model() {
    let scoring = ScoringTable::blosum50();

    let global = align("HEAGAWGHEE", "PAWHEAE", scoring, GapModel::linear(8).unwrap()).unwrap();
    assert_eq!(global.score, 1);

    let local = align(
        "HEAGAWGHEE",
        "PAWHEAE",
        scoring,
        GapModel::affine(10, 1).unwrap(),
    )
    .unwrap();
    assert_eq!(local.score, 26);
}

#[test]
fn test_unknown_residue_is_reported() {
    match align_global("HEAGJW", "PAW", ScoringTable::blosum62(), 8) {
        Err(PetasosError::Lookup { symbol }) => assert_eq!(symbol, 'J'),
        other => panic!("Expected Lookup error, got {:?}", other),
    }

    match align_local("PAW", "paw", ScoringTable::blosum62(), 10, 1) {
        Err(PetasosError::Lookup { symbol }) => assert_eq!(symbol, 'p'),
        other => panic!("Expected Lookup error, got {:?}", other),
    }
}

#[test]
fn test_negative_penalties_rejected_before_alignment() {
    // The lookup would fail too, but the parameter check runs first
    assert!(matches!(
        align_global("JJ", "JJ", ScoringTable::blosum62(), -1),
        Err(PetasosError::InvalidParameter(_))
    ));
    assert!(matches!(
        align_local("JJ", "JJ", ScoringTable::blosum62(), 10, -1),
        Err(PetasosError::InvalidParameter(_))
    ));
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = align_global("HEAGAWGHEE", "PAWHEAE", ScoringTable::blosum62(), 4).unwrap();
    let second = align_global("HEAGAWGHEE", "PAWHEAE", ScoringTable::blosum62(), 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_local_keeps_one_alignment_per_start_cell() {
    // Both A columns of the second sequence reach the optimum
    let result = align_local("A", "AAG", ScoringTable::blosum62(), 3, 1).unwrap();

    assert_eq!(result.score, 4);
    assert_eq!(result.alignments, pairs(&[("A", "A"), ("A", "A")]));

    let result = align_local("WAW", "HWWH", ScoringTable::blosum62(), 11, 1).unwrap();

    assert_eq!(result.score, 11);
    assert_eq!(
        result.alignments,
        pairs(&[("W", "W"), ("W", "W"), ("W", "W"), ("W", "W")])
    );
}

#[test]
fn test_oversized_penalties_are_rejected() {
    assert!(matches!(
        align_global("AAA", "A", ScoringTable::blosum62(), 1_500_000_000),
        Err(PetasosError::InvalidParameter(_))
    ));
    assert!(matches!(
        align_local("AAA", "AWA", ScoringTable::blosum62(), 10, 1_500_000_000),
        Err(PetasosError::InvalidParameter(_))
    ));

    // Large penalties that still fit are fine
    let result = align_global("A", "A", ScoringTable::blosum62(), 1_000_000_000).unwrap();
    assert_eq!(result.score, 4);
    assert_eq!(result.alignments, pairs(&[("A", "A")]));
}
