//! Property tests for the escaper.

use proptest::prelude::*;

use textab_template::escape_text;

proptest! {
    // Text with no reserved or mapped characters escapes to itself.
    #[test]
    fn safe_text_is_unchanged(s in "[a-zA-Z0-9 .,;:!?'()$_-]*") {
        prop_assert_eq!(escape_text(&s), s);
    }

    // Escaping safe text twice is the same as escaping it once.
    #[test]
    fn safe_text_escape_is_idempotent(s in "[a-zA-Z0-9 .,;:!?'()$_-]*") {
        let once = escape_text(&s);
        prop_assert_eq!(escape_text(&once), once);
    }

    // Reserved characters always come out prefixed, wherever they appear.
    #[test]
    fn reserved_always_prefixed(head in "[a-z ]*", tail in "[a-z ]*") {
        for reserved in ['%', '&', '@'] {
            let input = format!("{head}{reserved}{tail}");
            let expected = format!("{head}\\{reserved}{tail}");
            prop_assert_eq!(escape_text(&input), expected);
        }
    }
}
