use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E2101)
        .with_message("System.Runtime.CompilerServices.IsReadOnlyAttribute not found")
        .with_note("the type was requested while importing metadata")
        .with_file("/work/src/lib.lm");

    assert_eq!(diag.code, ErrorCode::E2101);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.file, Some(PathBuf::from("/work/src/lib.lm")));
}

#[test]
fn display_renders_code_message_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E2103)
        .with_message("attribute cannot be embedded")
        .with_note("only compiler-emitted attributes can be embedded");

    assert_eq!(
        diag.to_string(),
        "error[E2103]: attribute cannot be embedded\n  = note: only compiler-emitted attributes can be embedded"
    );
}

#[test]
fn display_places_the_file_before_notes() {
    let diag = Diagnostic::error(ErrorCode::E2102)
        .with_message("Lumen.Core.Option`1 not found")
        .with_note("the referenced compilation unit may be out of date")
        .with_file("/work/src/main.lm");

    assert_eq!(
        diag.to_string(),
        "error[E2102]: Lumen.Core.Option`1 not found\n  --> /work/src/main.lm\n  = note: the referenced compilation unit may be out of date"
    );
}
