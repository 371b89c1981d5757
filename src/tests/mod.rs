// Test suites for the extraction engine.
//
// Small units (scope stack, character stream, pattern set, output lines)
// keep their tests next to the code; the suites here cover the scanner
// end to end plus routing.

pub mod manager_tests;
