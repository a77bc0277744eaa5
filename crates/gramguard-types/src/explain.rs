//! Explain registry for violation kinds.
//!
//! Maps violation codes to human-readable explanations with remediation guidance.

use crate::ViolationKind;

/// Explanation entry for a violation kind.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the kind.
    pub title: &'static str,
    /// Which policy toggle produces it and what it detects.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a violation.
    pub before: &'static str,
    /// Code that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by violation code (`pointer`) or console label (`POINTER`).
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let kind = ViolationKind::from_code(&identifier.to_ascii_lowercase())?;
    Some(explain_kind(kind))
}

/// List all known codes.
pub fn all_codes() -> Vec<&'static str> {
    ViolationKind::ALL.iter().map(|k| k.code()).collect()
}

pub fn explain_kind(kind: ViolationKind) -> Explanation {
    match kind {
        ViolationKind::Header => Explanation {
            title: "Disallowed Header",
            description: "\
An `#include` names a header outside the project that the header policy rejects.

With `header.whitelist` set, every non-local header must be listed. With `header.blacklist` set,
listed headers are rejected. Headers located under `header.base_path` are project headers and are
never policed, even when their name matches a listed system header. Includes the front end could
not resolve are skipped.",
            remediation: "\
Remove the include and use facilities from an allowed header instead.",
            examples: ExamplePair {
                before: "#include <bits/stdc++.h>",
                after: "#include <iostream>",
            },
        },
        ViolationKind::Int64OrLarger => Explanation {
            title: "64-bit Or Larger Integer",
            description: "\
A declaration, return type or integer literal uses `long long`, `unsigned long long` or a 128-bit
integer while `grammar.disable_int64_or_larger` is set. Aliases are resolved first, and the check
looks through permitted pointers, references and arrays.",
            remediation: "\
Use `int` (or `unsigned int`) and keep values in range.",
            examples: ExamplePair {
                before: "long long total = 0;",
                after: "int total = 0;",
            },
        },
        ViolationKind::Pointer => Explanation {
            title: "Pointer Type",
            description: "\
A declaration or return type is a pointer while `grammar.disable_pointers` is set.",
            remediation: "\
Pass values directly, or use a reference if references are allowed.",
            examples: ExamplePair {
                before: "void swap(int* a, int* b);",
                after: "void swap(int& a, int& b);",
            },
        },
        ViolationKind::Reference => Explanation {
            title: "Reference Type",
            description: "\
A declaration or return type is an lvalue or rvalue reference while
`grammar.disable_reference` is set.",
            remediation: "\
Pass by value and return results instead of writing through references.",
            examples: ExamplePair {
                before: "void inc(int& x) { x = x + 1; }",
                after: "int inc(int x) { return x + 1; }",
            },
        },
        ViolationKind::Array => Explanation {
            title: "Array",
            description: "\
A declaration has array type, or an expression subscripts an array, while
`grammar.disable_array` is set.",
            remediation: "\
Use separate variables, or the container types the assignment allows.",
            examples: ExamplePair {
                before: "int scores[3];",
                after: "int first, second, third;",
            },
        },
        ViolationKind::Struct => Explanation {
            title: "Struct Declaration",
            description: "\
The translation unit declares a `struct` while `grammar.disable_struct` is set.",
            remediation: "\
Keep the fields as separate variables.",
            examples: ExamplePair {
                before: "struct Point { int x; int y; };",
                after: "int point_x, point_y;",
            },
        },
        ViolationKind::Class => Explanation {
            title: "Class Declaration",
            description: "\
The translation unit declares a `class` while `grammar.disable_class` is set.",
            remediation: "\
Write the logic as plain code in `main`, or as free functions if those are allowed.",
            examples: ExamplePair {
                before: "class Counter { int n; };",
                after: "int counter = 0;",
            },
        },
        ViolationKind::FreeFunction => Explanation {
            title: "Function Declaration",
            description: "\
A function other than `main` is declared while `grammar.disable_function` is set.",
            remediation: "\
Inline the function body at its call sites inside `main`.",
            examples: ExamplePair {
                before: "int square(int x) { return x * x; }",
                after: "int main() { int y = 3 * 3; return 0; }",
            },
        },
        ViolationKind::Branch => Explanation {
            title: "Branching",
            description: "\
An `if`, `switch`, conditional operator, relational or logical operator, or logical not appears
while `grammar.disable_branch` is set.",
            remediation: "\
Express the computation arithmetically, without comparisons.",
            examples: ExamplePair {
                before: "if (a > b) { m = a; } else { m = b; }",
                after: "m = (a + b + abs(a - b)) / 2;",
            },
        },
        ViolationKind::Goto => Explanation {
            title: "Goto Statement",
            description: "\
A `goto` statement appears while `grammar.disable_goto` is set.",
            remediation: "\
Restructure the control flow with loops or branches.",
            examples: ExamplePair {
                before: "again: x = x - 1; if (x) goto again;",
                after: "while (x) { x = x - 1; }",
            },
        },
        ViolationKind::Loop => Explanation {
            title: "Loop",
            description: "\
A `for`, `while` or `do` loop appears while `grammar.disable_loop` is set.",
            remediation: "\
Unroll the loop or use recursion if functions are allowed.",
            examples: ExamplePair {
                before: "for (int i = 0; i < 3; i++) { sum += i; }",
                after: "sum += 0; sum += 1; sum += 2;",
            },
        },
        ViolationKind::BitOperation => Explanation {
            title: "Bit Operation",
            description: "\
A shift, bitwise and/or/xor (including their compound assignments) or bitwise complement appears
while `grammar.disable_bit_operation` is set.",
            remediation: "\
Use arithmetic: multiply or divide by powers of two, use `%` to test parity.",
            examples: ExamplePair {
                before: "int half = n >> 1;",
                after: "int half = n / 2;",
            },
        },
        ViolationKind::SystemClass => Explanation {
            title: "System Class",
            description: "\
A declaration uses a class or struct type defined in a system header that is not listed in
`grammar.system_class.whitelist`, while `grammar.system_class.disable` is set. Project-defined
types are never reported by this rule.",
            remediation: "\
Use one of the whitelisted library types, or write the data structure yourself.",
            examples: ExamplePair {
                before: "std::vector<int> values;",
                after: "std::string text;",
            },
        },
        ViolationKind::InternalGlobal => Explanation {
            title: "Internal Global Variable",
            description: "\
A non-const variable has internal linkage (a `static` global or a global in an anonymous
namespace) while `grammar.disable_internal_global_var` is set. Constants are exempt.",
            remediation: "\
Move the variable into the function that uses it, or make it `const`.",
            examples: ExamplePair {
                before: "static int counter = 0;",
                after: "int main() { int counter = 0; return 0; }",
            },
        },
        ViolationKind::ExternalGlobal => Explanation {
            title: "External Global Variable",
            description: "\
A variable has external linkage while `grammar.disable_external_global_var` is set.",
            remediation: "\
Move the variable into the function that uses it.",
            examples: ExamplePair {
                before: "int total = 0;\nint main() { return total; }",
                after: "int main() { int total = 0; return total; }",
            },
        },
        ViolationKind::StaticLocal => Explanation {
            title: "Static Local Variable",
            description: "\
A block-scope variable is declared `static` while `grammar.disable_static_local_var` is set.",
            remediation: "\
Drop `static` and pass the state explicitly.",
            examples: ExamplePair {
                before: "int next() { static int n = 0; return ++n; }",
                after: "int next(int n) { return n + 1; }",
            },
        },
    }
}
