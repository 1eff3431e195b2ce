use itertools::{Either, Itertools};

use crate::automaton::{Language, Letter};

/// Enumerates every word over `alphabet` of length `0..=max_word_length`,
/// shortest first.
pub fn words_up_to<L: Letter>(
    alphabet: &[L],
    max_word_length: usize,
) -> impl Iterator<Item = Vec<L>> + '_ {
    (0..=max_word_length).flat_map(move |length| {
        if length == 0 {
            Either::Left(std::iter::once(Vec::new()))
        } else {
            Either::Right(
                std::iter::repeat_n(alphabet, length)
                    .multi_cartesian_product()
                    .map(|word| word.into_iter().cloned().collect_vec()),
            )
        }
    })
}

fn sorted_alphabet<A: Language>(automaton: &A) -> Vec<&A::Letter> {
    automaton.alphabet().iter().sorted().collect_vec()
}

/// Returns the shortest word of length at most `max_word_length` that exactly
/// one of the two automata accepts, or None if they agree on all of them.
/// Words are built from the alphabet of `a`.
pub fn find_distinguishing_word<A, B>(
    a: &A,
    b: &B,
    max_word_length: usize,
) -> Option<Vec<A::Letter>>
where
    A: Language,
    B: Language<Letter = A::Letter>,
{
    words_up_to(a.alphabet(), max_word_length).find(|word| a.accepts(word) != b.accepts(word))
}

/// Checks if two automata accept the same language.
/// This is done by checking if the alphabets are the same and then checking if
/// the automata accept the same words up to a certain length (inclusive).
pub fn same_language<A, B>(a: &A, b: &B, max_word_length: usize) -> bool
where
    A: Language,
    B: Language<Letter = A::Letter>,
{
    // first we need to check if the alphabets are the same
    if sorted_alphabet(a) != sorted_alphabet(b) {
        return false;
    }

    find_distinguishing_word(a, b, max_word_length).is_none()
}

pub fn assert_same_language<A, B>(a: &A, b: &B, max_word_length: usize)
where
    A: Language,
    B: Language<Letter = A::Letter>,
{
    assert_eq!(
        sorted_alphabet(a),
        sorted_alphabet(b),
        "Alphabets are not the same"
    );

    if let Some(word) = find_distinguishing_word(a, b, max_word_length) {
        if a.accepts(&word) {
            panic!(
                "{:?} is accepted by automaton `a` but not by automaton `b`. Thus their languages are not equal.",
                word
            );
        } else {
            panic!(
                "{:?} is accepted by automaton `b` but not by automaton `a`. Thus their languages are not equal.",
                word
            );
        }
    }
}
