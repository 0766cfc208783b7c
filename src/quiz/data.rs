//! Built-in quiz question tables.
//!
//! Three pharmacology categories ship built in: brand-to-generic drug
//! names, diabetes agents, and anticoagulants.
//! Custom packs can be added as JSON files next to the save file; see
//! `catalog::load_category_from_file`.

use super::types::{QuizCategory, QuizItem};

fn quiz(prompt: &str, correct: &str, options: &[&str]) -> QuizItem {
    QuizItem::new(prompt, correct, options)
}

/// Brand-name to generic-name questions (analgesics and GI drugs).
pub fn brand_names() -> QuizCategory {
    QuizCategory {
        id: "brand_names".to_string(),
        name: "Brand Names".to_string(),
        description: "Match common brand-name drugs to their generic names.".to_string(),
        quizzes: vec![
            quiz(
                "What is the generic name of Aspirin?",
                "acetylsalicylic acid",
                &[
                    "acetylsalicylic acid",
                    "ibuprofen",
                    "acetaminophen",
                    "loxoprofen",
                ],
            ),
            quiz(
                "What is the generic name of Advil?",
                "ibuprofen",
                &[
                    "acetylsalicylic acid",
                    "ibuprofen",
                    "acetaminophen",
                    "loxoprofen",
                ],
            ),
            quiz(
                "What is the generic name of Tylenol?",
                "acetaminophen",
                &[
                    "acetylsalicylic acid",
                    "ibuprofen",
                    "acetaminophen",
                    "loxoprofen",
                ],
            ),
            quiz(
                "What is the generic name of Voltaren?",
                "diclofenac",
                &["diclofenac", "indomethacin", "naproxen", "celecoxib"],
            ),
            quiz(
                "What is the generic name of Celebrex?",
                "celecoxib",
                &["diclofenac", "indomethacin", "naproxen", "celecoxib"],
            ),
            quiz(
                "What is the generic name of Pepcid?",
                "famotidine",
                &["famotidine", "ranitidine", "cimetidine", "nizatidine"],
            ),
            quiz(
                "What is the generic name of Prevacid?",
                "lansoprazole",
                &[
                    "lansoprazole",
                    "omeprazole",
                    "esomeprazole",
                    "rabeprazole",
                ],
            ),
            quiz(
                "What is the generic name of Nexium?",
                "esomeprazole",
                &[
                    "lansoprazole",
                    "omeprazole",
                    "esomeprazole",
                    "rabeprazole",
                ],
            ),
            quiz(
                "What is the generic name of Aleve?",
                "naproxen",
                &["diclofenac", "indomethacin", "naproxen", "celecoxib"],
            ),
            quiz(
                "What is the generic name of Mucinex?",
                "guaifenesin",
                &[
                    "guaifenesin",
                    "ambroxol",
                    "bromhexine",
                    "acetylcysteine",
                ],
            ),
        ],
    }
}

/// Diabetes pharmacology questions.
pub fn diabetes() -> QuizCategory {
    QuizCategory {
        id: "diabetes".to_string(),
        name: "Diabetes Agents".to_string(),
        description: "Mechanisms, side effects, and drug classes of antidiabetic agents."
            .to_string(),
        quizzes: vec![
            quiz(
                "What is the primary mechanism of metformin?",
                "inhibition of hepatic gluconeogenesis",
                &[
                    "inhibition of hepatic gluconeogenesis",
                    "stimulation of insulin secretion",
                    "alpha-glucosidase inhibition",
                    "SGLT2 inhibition",
                ],
            ),
            quiz(
                "Which adverse effect is of greatest concern with SGLT2 inhibitors?",
                "urinary tract infection",
                &[
                    "urinary tract infection",
                    "hypoglycemia",
                    "lactic acidosis",
                    "weight gain",
                ],
            ),
            quiz(
                "Glimepiride belongs to which class of antidiabetic drugs?",
                "sulfonylureas",
                &[
                    "sulfonylureas",
                    "biguanides",
                    "thiazolidinediones",
                    "DPP-4 inhibitors",
                ],
            ),
            quiz(
                "What is the mechanism of sitagliptin (Januvia)?",
                "DPP-4 inhibition",
                &[
                    "DPP-4 inhibition",
                    "improved insulin sensitivity",
                    "delayed intestinal glucose absorption",
                    "increased urinary glucose excretion",
                ],
            ),
            quiz(
                "Which antidiabetic class carries a comparatively low hypoglycemia risk?",
                "DPP-4 inhibitors",
                &[
                    "DPP-4 inhibitors",
                    "sulfonylureas",
                    "insulin preparations",
                    "glinides",
                ],
            ),
            quiz(
                "Which rare but serious adverse effect is associated with metformin?",
                "lactic acidosis",
                &[
                    "lactic acidosis",
                    "agranulocytosis",
                    "rhabdomyolysis",
                    "QT prolongation",
                ],
            ),
            quiz(
                "Pioglitazone improves glycemic control primarily by which mechanism?",
                "increasing insulin sensitivity via PPAR-gamma",
                &[
                    "increasing insulin sensitivity via PPAR-gamma",
                    "stimulating beta-cell insulin release",
                    "inhibiting DPP-4",
                    "blocking renal glucose reabsorption",
                ],
            ),
            quiz(
                "Acarbose lowers postprandial glucose by inhibiting which enzyme?",
                "alpha-glucosidase",
                &[
                    "alpha-glucosidase",
                    "dipeptidyl peptidase-4",
                    "aldose reductase",
                    "HMG-CoA reductase",
                ],
            ),
        ],
    }
}

/// Anticoagulant and antiplatelet pharmacology questions.
pub fn anticoagulants() -> QuizCategory {
    QuizCategory {
        id: "anticoagulants".to_string(),
        name: "Anticoagulants".to_string(),
        description: "Anticoagulant and antiplatelet drugs, their targets and monitoring."
            .to_string(),
        quizzes: vec![
            quiz(
                "Warfarin exerts its anticoagulant effect by antagonizing which vitamin?",
                "vitamin K",
                &["vitamin K", "vitamin B12", "vitamin C", "vitamin D"],
            ),
            quiz(
                "Which laboratory value is used to monitor warfarin therapy?",
                "PT-INR",
                &["PT-INR", "aPTT", "platelet count", "D-dimer"],
            ),
            quiz(
                "What is the direct molecular target of dabigatran?",
                "thrombin",
                &["thrombin", "factor Xa", "factor VIIa", "plasminogen"],
            ),
            quiz(
                "Rivaroxaban and apixaban directly inhibit which clotting factor?",
                "factor Xa",
                &["factor Xa", "factor IXa", "thrombin", "factor XIIIa"],
            ),
            quiz(
                "Clopidogrel inhibits platelet aggregation by blocking which receptor?",
                "P2Y12 ADP receptor",
                &[
                    "P2Y12 ADP receptor",
                    "GPIIb/IIIa receptor",
                    "thromboxane A2 receptor",
                    "PAR-1 thrombin receptor",
                ],
            ),
            quiz(
                "Which agent reverses heparin in the event of major bleeding?",
                "protamine sulfate",
                &[
                    "protamine sulfate",
                    "vitamin K",
                    "idarucizumab",
                    "tranexamic acid",
                ],
            ),
            quiz(
                "Low-dose aspirin prevents thrombosis by irreversibly inhibiting which enzyme?",
                "cyclooxygenase-1",
                &[
                    "cyclooxygenase-1",
                    "cyclooxygenase-2",
                    "phosphodiesterase-3",
                    "lipoxygenase",
                ],
            ),
            quiz(
                "Heparin-induced thrombocytopenia involves antibodies against which complex?",
                "heparin-platelet factor 4",
                &[
                    "heparin-platelet factor 4",
                    "heparin-antithrombin III",
                    "heparin-fibrinogen",
                    "heparin-von Willebrand factor",
                ],
            ),
        ],
    }
}
