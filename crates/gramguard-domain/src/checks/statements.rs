use super::Detection;
use crate::policy::GrammarPolicy;
use gramguard_types::ViolationKind;

pub fn branch(policy: &GrammarPolicy, out: &mut Vec<Detection>) {
    if policy.disable_branch {
        out.push(Detection::new(ViolationKind::Branch));
    }
}

pub fn goto(policy: &GrammarPolicy, out: &mut Vec<Detection>) {
    if policy.disable_goto {
        out.push(Detection::new(ViolationKind::Goto));
    }
}

pub fn looping(policy: &GrammarPolicy, out: &mut Vec<Detection>) {
    if policy.disable_loop {
        out.push(Detection::new(ViolationKind::Loop));
    }
}
