//! # The Argument-Case Dataset
//!
//! The five literal fixture records, in canonical order (case ids `"1"`
//! through `"5"`). The collection is materialized once behind a
//! `OnceLock` on first access and is immutable thereafter; every caller
//! shares the same `&'static` slice.
//!
//! Evidence ids are numbered sequentially across the whole dataset, not
//! per case: appellant exhibits run C1, C2, C3, ... and respondent
//! exhibits run R1, R2, R3, ... in dataset order. Case 2's appellant
//! therefore opens with C3.

use std::sync::OnceLock;

use moot_core::{CaseCategory, CaseId, EvidenceId};

use crate::record::{ArgumentCase, Evidence, Position};

/// Number of records in the dataset. Used for compile-time assertions.
pub const ARGUMENT_CASE_COUNT: usize = 5;

fn evidence(id: &str, desc: &str) -> Evidence {
    Evidence {
        id: EvidenceId::new(id),
        desc: desc.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn case_1() -> ArgumentCase {
    ArgumentCase {
        id: CaseId::new("1"),
        issue: "Personal Jurisdiction".to_string(),
        category: CaseCategory::Jurisdiction,
        appellant: Position {
            main_argument: "The trial court lacked personal jurisdiction over the appellant"
                .to_string(),
            details: strings(&[
                "Appellant maintains no offices, employees, or agents in the forum state",
                "The contract was negotiated and executed entirely outside the forum",
                "Appellant's website is passive and does not target forum residents",
            ]),
            evidence: vec![
                evidence("C1", "Corporate registration records"),
                evidence("C2", "Contract execution documents"),
            ],
            caselaw: strings(&[
                "International Shoe Co. v. Washington (1945)",
                "World-Wide Volkswagen Corp. v. Woodson (1980)",
            ]),
        },
        respondent: Position {
            main_argument: "Appellant purposefully availed itself of the forum state's market"
                .to_string(),
            details: strings(&[
                "Appellant shipped over three thousand orders to forum residents",
                "Appellant purchased targeted advertising in forum media markets",
                "A forum-based distributor acted as appellant's exclusive agent",
            ]),
            evidence: vec![
                evidence("R1", "Sales and shipping records"),
                evidence("R2", "Advertising invoices"),
            ],
            caselaw: strings(&[
                "Burger King Corp. v. Rudzewicz (1985)",
                "Calder v. Jones (1984)",
            ]),
        },
    }
}

fn case_2() -> ArgumentCase {
    ArgumentCase {
        id: CaseId::new("2"),
        issue: "Patent Validity".to_string(),
        category: CaseCategory::IntellectualProperty,
        appellant: Position {
            main_argument: "The asserted patent is invalid as obvious over the prior art"
                .to_string(),
            details: strings(&[
                "Every claim element appears in the combined prior-art references",
                "A person of ordinary skill had clear motivation to combine the references",
                "Secondary considerations cannot overcome the strong obviousness showing",
            ]),
            evidence: vec![
                evidence("C3", "Technical specifications"),
                evidence("C4", "Prior art publications"),
            ],
            caselaw: strings(&[
                "KSR International Co. v. Teleflex Inc. (2007)",
                "Graham v. John Deere Co. (1966)",
            ]),
        },
        respondent: Position {
            main_argument: "The patent claims a non-obvious inventive combination".to_string(),
            details: strings(&[
                "The prior art teaches away from the claimed configuration",
                "Commercial success and industry praise support non-obviousness",
                "No single reference discloses the combination, as appellant's expert conceded",
            ]),
            evidence: vec![
                evidence("R3", "Expert declaration on inventive step"),
                evidence("R4", "Commercial success data"),
            ],
            caselaw: strings(&[
                "Diamond v. Diehr (1981)",
                "Stratoflex, Inc. v. Aeroquip Corp. (1983)",
            ]),
        },
    }
}

fn case_3() -> ArgumentCase {
    ArgumentCase {
        id: CaseId::new("3"),
        issue: "Wrongful Termination".to_string(),
        category: CaseCategory::Employment,
        appellant: Position {
            main_argument: "Appellant was terminated in retaliation for protected whistleblowing"
                .to_string(),
            details: strings(&[
                "Appellant reported safety violations to the regulator three weeks before dismissal",
                "Appellant's performance reviews exceeded expectations for five consecutive years",
                "The claimed restructuring eliminated only appellant's position",
            ]),
            evidence: vec![
                evidence("C5", "Regulatory complaint filing"),
                evidence("C6", "Performance review history"),
            ],
            caselaw: strings(&[
                "McDonnell Douglas Corp. v. Green (1973)",
                "Burlington Northern & Santa Fe Railway Co. v. White (2006)",
            ]),
        },
        respondent: Position {
            main_argument: "The termination was part of a legitimate company-wide restructuring"
                .to_string(),
            details: strings(&[
                "Twelve positions were eliminated across three departments",
                "The restructuring plan was documented before the regulatory complaint",
                "No decision-maker was aware of the complaint when the plan was approved",
            ]),
            evidence: vec![
                evidence("R5", "Restructuring plan board minutes"),
                evidence("R6", "Reduction-in-force position list"),
            ],
            caselaw: strings(&[
                "St. Mary's Honor Center v. Hicks (1993)",
                "Reeves v. Sanderson Plumbing Products, Inc. (2000)",
            ]),
        },
    }
}

fn case_4() -> ArgumentCase {
    ArgumentCase {
        id: CaseId::new("4"),
        issue: "Breach of Contract".to_string(),
        category: CaseCategory::Contract,
        appellant: Position {
            main_argument: "Respondent's late delivery was a material breach excusing performance"
                .to_string(),
            details: strings(&[
                "The agreement made the delivery schedule an express condition",
                "Respondent missed four consecutive contractual delivery dates",
                "The delays forced appellant to halt its production line twice",
            ]),
            evidence: vec![
                evidence("C7", "Signed supply agreement"),
                evidence("C8", "Delivery and receiving logs"),
            ],
            caselaw: strings(&[
                "Jacob & Youngs, Inc. v. Kent (1921)",
                "Hochster v. De La Tour (1853)",
            ]),
        },
        respondent: Position {
            main_argument: "Any delay was immaterial and was waived by appellant's conduct"
                .to_string(),
            details: strings(&[
                "Appellant accepted and paid for every delayed shipment without protest",
                "Appellant's own change orders caused the schedule slippage",
                "The agreement's cure provision was never invoked",
            ]),
            evidence: vec![
                evidence("R7", "Correspondence accepting revised schedules"),
                evidence("R8", "Payment records for delayed shipments"),
            ],
            caselaw: strings(&[
                "Clark v. West (1908)",
                "Restatement (Second) of Contracts section 241",
            ]),
        },
    }
}

fn case_5() -> ArgumentCase {
    ArgumentCase {
        id: CaseId::new("5"),
        issue: "Duty of Care".to_string(),
        category: CaseCategory::Tort,
        appellant: Position {
            main_argument: "Respondent owed and breached a duty of care toward the appellant"
                .to_string(),
            details: strings(&[
                "Respondent controlled the premises where the injury occurred",
                "The hazard had been reported twice in the preceding month",
                "No warning signage or barrier was in place at the time of the accident",
            ]),
            evidence: vec![
                evidence("C9", "Incident report"),
                evidence("C10", "Prior safety inspection records"),
            ],
            caselaw: strings(&[
                "Donoghue v. Stevenson (1932)",
                "Palsgraf v. Long Island Railroad Co. (1928)",
            ]),
        },
        respondent: Position {
            main_argument: "The injury was not a foreseeable result of any act of respondent"
                .to_string(),
            details: strings(&[
                "The hazard arose minutes before the accident and could not have been discovered",
                "Respondent's maintenance schedule met the industry standard",
                "Appellant ignored a posted route and entered a restricted area",
            ]),
            evidence: vec![
                evidence("R9", "Maintenance logs"),
                evidence("R10", "Eyewitness statements"),
            ],
            caselaw: strings(&[
                "Bolton v. Stone (1951)",
                "Caparo Industries plc v. Dickman (1990)",
            ]),
        },
    }
}

/// Returns all five argument cases in canonical order (ids `"1"`..`"5"`).
///
/// The slice is materialized on first call and shared by every caller
/// thereafter. Construction cannot fail: the records are literals with
/// no external input.
pub fn argument_cases() -> &'static [ArgumentCase] {
    static CASES: OnceLock<Vec<ArgumentCase>> = OnceLock::new();
    CASES
        .get_or_init(|| vec![case_1(), case_2(), case_3(), case_4(), case_5()])
        .as_slice()
}

/// Look up a case by its stable string identifier.
///
/// Returns `None` when no record carries the given id.
pub fn find_case(id: &str) -> Option<&'static ArgumentCase> {
    argument_cases().iter().find(|case| case.id.as_str() == id)
}
