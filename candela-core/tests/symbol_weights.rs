use candela_core::parse_symbol_weights;
use candela_types::SymbolSyntax;

fn syntax() -> SymbolSyntax {
    SymbolSyntax::default()
}

#[test]
fn unweighted_list_gets_equal_shares() {
    let w = parse_symbol_weights("AAA,BBB", &syntax());
    assert_eq!(
        w.entries,
        vec![("AAA".to_string(), 0.5), ("BBB".to_string(), 0.5)]
    );
    assert!(!w.explicit);
}

#[test]
fn four_unweighted_symbols_each_get_a_quarter() {
    let w = parse_symbol_weights("A,B,C,D", &syntax());
    assert_eq!(w.len(), 4);
    for (_, weight) in &w.entries {
        assert_eq!(*weight, 0.25);
    }
}

#[test]
fn explicit_weights_are_taken_verbatim() {
    let w = parse_symbol_weights("AAA:2,BBB:3", &syntax());
    assert_eq!(
        w.entries,
        vec![("AAA".to_string(), 2.0), ("BBB".to_string(), 3.0)]
    );
    assert!(w.explicit);
    assert_eq!(w.total_weight(), 5.0);
}

#[test]
fn malformed_weight_keeps_entire_token_as_symbol() {
    // The unparsed token keeps its separator and suffix, and falls back to
    // an equal share of the whole expression.
    let w = parse_symbol_weights("AAA:two,BBB:3", &syntax());
    assert_eq!(w.entries[0], ("AAA:two".to_string(), 0.5));
    assert_eq!(w.entries[1], ("BBB".to_string(), 3.0));
    assert!(w.explicit);
}

#[test]
fn mixed_weighted_and_bare_entries() {
    // The bare entry defaults to 1/N of the whole expression, not of the
    // unweighted remainder.
    let w = parse_symbol_weights("AAA:2,BBB,CCC", &syntax());
    assert_eq!(w.entries[0], ("AAA".to_string(), 2.0));
    assert_eq!(w.entries[1], ("BBB".to_string(), 1.0 / 3.0));
    assert_eq!(w.entries[2], ("CCC".to_string(), 1.0 / 3.0));
    assert!(w.explicit);
}

#[test]
fn bare_symbol_is_a_single_full_share() {
    let w = parse_symbol_weights("AAPL", &syntax());
    assert_eq!(w.entries, vec![("AAPL".to_string(), 1.0)]);
    assert!(!w.explicit);
}

#[test]
fn separators_come_from_configuration() {
    let custom = SymbolSyntax {
        list_separator: ';',
        weight_separator: '@',
    };
    let w = parse_symbol_weights("AAA@2;BBB", &custom);
    assert_eq!(w.entries[0], ("AAA".to_string(), 2.0));
    assert_eq!(w.entries[1], ("BBB".to_string(), 0.5));
    // The default separators now read as ordinary symbol characters.
    let w = parse_symbol_weights("AAA:2,BBB", &custom);
    assert_eq!(w.entries, vec![("AAA:2,BBB".to_string(), 1.0)]);
}
