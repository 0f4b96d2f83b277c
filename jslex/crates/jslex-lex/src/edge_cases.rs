//! Edge case tests for jslex-lex
