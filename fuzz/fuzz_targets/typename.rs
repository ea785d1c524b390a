#![no_main]

use libfuzzer_sys::fuzz_target;
use clrtypename::{TypeName, TypeNameFormat};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(name) = TypeName::parse(input) {
        // Whatever parses must render to text that parses into the same rendering
        let formatted = name.format(TypeNameFormat::full());
        let reparsed = TypeName::parse(&formatted).expect("formatted name failed to parse");
        assert_eq!(reparsed.format(TypeNameFormat::full()), formatted);
    }
});
