use super::Detection;
use crate::model::BinaryOperator;
use crate::policy::GrammarPolicy;
use gramguard_types::ViolationKind;

enum OperatorFamily {
    Bit,
    Branch,
    Other,
}

fn family(op: BinaryOperator) -> OperatorFamily {
    use BinaryOperator as Op;
    match op {
        Op::Shl
        | Op::Shr
        | Op::And
        | Op::Xor
        | Op::Or
        | Op::ShlAssign
        | Op::ShrAssign
        | Op::AndAssign
        | Op::XorAssign
        | Op::OrAssign => OperatorFamily::Bit,
        Op::Lt
        | Op::Gt
        | Op::Le
        | Op::Ge
        | Op::Eq
        | Op::Ne
        | Op::LAnd
        | Op::LOr
        | Op::Cmp => OperatorFamily::Branch,
        Op::PtrMemD
        | Op::PtrMemI
        | Op::Mul
        | Op::Div
        | Op::Rem
        | Op::Add
        | Op::Sub
        | Op::Assign
        | Op::MulAssign
        | Op::DivAssign
        | Op::RemAssign
        | Op::AddAssign
        | Op::SubAssign
        | Op::Comma => OperatorFamily::Other,
    }
}

pub fn binary(op: BinaryOperator, policy: &GrammarPolicy, out: &mut Vec<Detection>) {
    match family(op) {
        OperatorFamily::Bit if policy.disable_bit_operation => {
            out.push(Detection::new(ViolationKind::BitOperation));
        }
        OperatorFamily::Branch if policy.disable_branch => {
            out.push(Detection::new(ViolationKind::Branch));
        }
        _ => {}
    }
}

pub fn unary(token: &str, policy: &GrammarPolicy, out: &mut Vec<Detection>) {
    match token {
        "!" if policy.disable_branch => out.push(Detection::new(ViolationKind::Branch)),
        "~" if policy.disable_bit_operation => {
            out.push(Detection::new(ViolationKind::BitOperation));
        }
        _ => {}
    }
}

pub fn subscript(policy: &GrammarPolicy, out: &mut Vec<Detection>) {
    if policy.disable_array {
        out.push(Detection::new(ViolationKind::Array));
    }
}
