//! Unit tests for feature classification

use parity_report::{Feature, guess_feature};

#[test]
fn test_named_examples() {
    assert_eq!(guess_feature("dot-repeat test"), Feature::DotRepeat);
    assert_eq!(guess_feature("paste after delete"), Feature::PasteAfterOp);
    assert_eq!(guess_feature("yank word"), Feature::Yank);
    assert_eq!(guess_feature("xyz"), Feature::Other);
}

#[test]
fn test_each_rule_reachable() {
    assert_eq!(guess_feature("'."), Feature::DotRepeat);
    assert_eq!(guess_feature("i<Esc>"), Feature::InsertExit);
    assert_eq!(guess_feature("cp"), Feature::PasteAfterOp);
    assert_eq!(guess_feature("P"), Feature::Paste);
    assert_eq!(guess_feature("yw"), Feature::Yank);
    assert_eq!(guess_feature("dd"), Feature::Delete);
    assert_eq!(guess_feature("ciw"), Feature::Change);
    assert_eq!(guess_feature("fx"), Feature::Find);
    assert_eq!(guess_feature("ta"), Feature::Find);
    assert_eq!(guess_feature("w"), Feature::MotionWord);
    assert_eq!(guess_feature("b"), Feature::MotionWord);
    assert_eq!(guess_feature("u"), Feature::UndoRedo);
    assert_eq!(guess_feature(""), Feature::Other);
}

#[test]
fn test_first_match_wins() {
    // contains 'p' and 'd', so the paste rules win over delete
    assert_eq!(guess_feature("dp"), Feature::PasteAfterOp);
    // "dot" also contains 'd' and 't'
    assert_eq!(guess_feature("DOT after dw"), Feature::DotRepeat);
    // <c-r> contains 'c' and is caught by the change rule first
    assert_eq!(guess_feature("<C-r>"), Feature::Change);
    // 'y' without 'w' falls through the yank rule
    assert_eq!(guess_feature("yy"), Feature::Other);
}

#[test]
fn test_feature_string_forms() {
    for feature in Feature::ALL {
        assert_eq!(feature.as_str().parse::<Feature>(), Ok(feature));
        assert_eq!(feature.to_string(), feature.as_str());
    }
    assert_eq!(Feature::MotionWord.as_str(), "motion-word");
}
