use serde::Serialize;
use std::collections::BTreeSet;

use crate::catalog::normalizer::is_data_artifact;
use crate::catalog::ProgramRecord;
use crate::{FOREIGN_LANGUAGE_EXAM, NATIVE_LANGUAGE_EXAM};

/// Exam names an applicant may need for a set of programs, sorted for stable display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredExams {
    pub mandatory_core: BTreeSet<String>,
    pub elective: BTreeSet<String>,
}

/// Unions the active exam names of `programs`. The native-language exam and the
/// foreign-language placeholder are always part of the mandatory core.
pub fn required_exams<'a, I>(programs: I) -> RequiredExams
where
    I: IntoIterator<Item = &'a ProgramRecord>,
{
    let mut mandatory_core = BTreeSet::from([
        NATIVE_LANGUAGE_EXAM.to_string(),
        FOREIGN_LANGUAGE_EXAM.to_string(),
    ]);
    let mut elective = BTreeSet::new();

    for program in programs {
        mandatory_core.extend(
            program
                .mandatory_exams
                .iter()
                .filter(|slot| slot.is_active() && !is_data_artifact(&slot.exam_name))
                .map(|slot| slot.exam_name.clone()),
        );
        elective.extend(
            program
                .elective_exams
                .iter()
                .filter(|slot| slot.is_active() && !is_data_artifact(&slot.exam_name))
                .map(|slot| slot.exam_name.clone()),
        );
    }

    RequiredExams {
        mandatory_core,
        elective,
    }
}
