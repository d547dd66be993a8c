use cobalt_core::{CodecError, Dictionary, StreamWriter, Token, TokenStream, MAX_WORDS};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-e]{1,4}"
}

proptest! {
    #[test]
    fn every_ordinal_finds_itself(words in btree_set(word(), 1..60)) {
        let dict = Dictionary::from_unsorted(&words).unwrap();

        for ordinal in 0..dict.len() as u16 {
            prop_assert_eq!(dict.find_word(dict.word_at(ordinal)).unwrap(), ordinal);
        }
    }

    #[test]
    fn absent_words_are_not_found(
        words in btree_set(word(), 1..60),
        probe in "[a-f]{1,5}",
    ) {
        let dict = Dictionary::from_unsorted(&words).unwrap();

        if words.contains(&probe) {
            prop_assert_eq!(dict.word_at(dict.find_word(&probe).unwrap()), probe.as_str());
        } else {
            let is_not_found = matches!(dict.find_word(&probe), Err(CodecError::WordNotFound(_)));
            prop_assert!(is_not_found);
        }
    }

    #[test]
    fn serialized_streams_parse_back(
        items in vec(prop_oneof![
            (0u16..1000).prop_map(Token::Word),
            "[a-z]{0,6}".prop_map(|s| Token::Literal(s.into())),
        ], 0..20),
    ) {
        let mut writer = StreamWriter::new();
        for item in &items {
            match item {
                Token::Word(ordinal) => writer.word(*ordinal).unwrap(),
                Token::Literal(text) => writer.literal(text).unwrap(),
                Token::EndOfStream => unreachable!(),
            }
        }
        let stream = writer.finish().unwrap();
        let bytes = stream.to_bytes();

        prop_assert_eq!(bytes.len(), stream.encoded_len());
        prop_assert_eq!(TokenStream::from_bytes(&bytes).unwrap(), stream);
    }

    #[test]
    fn written_words_always_parse_back(value in any::<u16>()) {
        let mut writer = StreamWriter::new();

        match writer.word(value) {
            Ok(()) => {
                prop_assert!((value as usize) < MAX_WORDS);
                let stream = writer.finish().unwrap();
                prop_assert_eq!(TokenStream::from_bytes(&stream.to_bytes()).unwrap(), stream);
            }
            Err(err) => {
                prop_assert!((value as usize) >= MAX_WORDS);
                let is_unknown = matches!(err, CodecError::UnknownOrdinal(v) if v == value);
                prop_assert!(is_unknown);
            }
        }
    }
}

#[test]
fn empty_word_is_distinct_from_missing_word() {
    let dict = Dictionary::from_words(["cat", "dog", "fish"]).unwrap();

    assert!(matches!(dict.find_word(""), Err(CodecError::EmptyWord)));
    assert!(matches!(dict.find_word("cow"), Err(CodecError::WordNotFound(_))));
}
