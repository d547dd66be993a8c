use cobalt_codec::{
    builtin_dictionary, Codec, Dictionary, EmptyTokenPolicy, Token, BEGIN_LITERAL, END_OF_STREAM,
};
use proptest::prelude::*;
use proptest::sample::select;

const WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "he", "her", "his", "i",
    "in", "is", "it", "not", "of", "on", "or", "she", "that", "the", "they", "this", "to", "was",
    "with",
];

fn codec() -> Codec {
    Codec::builder()
        .dictionary(Dictionary::from_unsorted(WORDS).unwrap())
        .build()
}

proptest! {
    #[test]
    fn dictionary_sentences_reconstruct(words in proptest::collection::vec(select(WORDS), 1..25)) {
        let codec = codec();
        let sentence = words.join(" ");
        let stream = codec.encode(&sentence).unwrap();

        prop_assert_eq!(stream.len(), words.len() + 1);
        prop_assert_eq!(stream.tokens().last(), Some(&Token::EndOfStream));

        let rebuilt: Vec<&str> = stream
            .tokens()
            .iter()
            .filter_map(|t| match t {
                Token::Word(ordinal) => Some(codec.dictionary().word_at(*ordinal)),
                _ => None,
            })
            .collect();
        prop_assert_eq!(rebuilt.join(" "), sentence);
    }

    #[test]
    fn one_unknown_word_is_embedded_verbatim(
        before in proptest::collection::vec(select(WORDS), 0..5),
        unknown in "[x-z]{1,8}",
        after in proptest::collection::vec(select(WORDS), 0..5),
    ) {
        let codec = codec();
        let mut words: Vec<&str> = before.clone();
        words.push(unknown.as_str());
        words.extend(&after);
        let sentence = words.join(" ");

        let bytes = codec.encode_to_bytes(&sentence).unwrap();
        let marker = BEGIN_LITERAL.to_le_bytes();
        let at = 2 * before.len();

        prop_assert_eq!(&bytes[at..at + 2], &marker[..]);
        prop_assert_eq!(&bytes[at + 2..at + 2 + unknown.len()], unknown.as_bytes());
        prop_assert_eq!(bytes[at + 2 + unknown.len()], 0);
        prop_assert_eq!(codec.decode_bytes(&bytes).unwrap(), sentence);
    }

    #[test]
    fn preserve_policy_keeps_spacing(sentence in "[ a-z]{0,40}") {
        let codec = Codec::builder()
            .dictionary(Dictionary::from_unsorted(WORDS).unwrap())
            .empty_tokens(EmptyTokenPolicy::Preserve)
            .build();

        let bytes = codec.encode_to_bytes(&sentence).unwrap();
        prop_assert_eq!(codec.decode_bytes(&bytes).unwrap(), sentence);
    }
}

#[test]
fn cat_dog_fish_streams() {
    let codec = Codec::builder()
        .dictionary(Dictionary::from_words(["cat", "dog", "fish"]).unwrap())
        .build();

    assert_eq!(codec.find_word("dog").unwrap(), 1);
    assert_eq!(codec.encode("cat dog").unwrap().units(), vec![0, 1, END_OF_STREAM]);
    assert_eq!(
        codec.encode_to_bytes("cat zzz").unwrap(),
        vec![0, 0, 0xFF, 0xFF, b'z', b'z', b'z', 0, 0xFC, 0xFF]
    );
    assert_eq!(codec.encode("").unwrap().units(), vec![END_OF_STREAM]);
}

#[test]
fn builtin_table_round_trips_every_ordinal() {
    let dict = builtin_dictionary();

    assert!(dict.len() > 100);
    for ordinal in 0..dict.len() as u16 {
        assert_eq!(dict.find_word(dict.word_at(ordinal)).unwrap(), ordinal);
    }
}

#[test]
fn builtin_codec_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                Codec::builtin()
                    .encode("the people of the world")
                    .unwrap()
                    .units()
            })
        })
        .collect();

    let results: Vec<Vec<u16>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].len(), 6);
}
