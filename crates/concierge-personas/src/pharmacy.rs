use concierge_core::error::ConciergeError;
use concierge_core::persona::Persona;
use concierge_core::rule::ResponseTable;

use crate::{rule, rule_any, DEFAULT_ACCENT};

/// Alex's Family Pharmacy — refills, insurance, immunizations, delivery.
///
/// Insurance is listed ahead of hours: billing questions routinely mention
/// opening times in the same breath, and the insurance answer is the one
/// that matters when they tie.
pub fn pharmacy() -> Result<Persona, ConciergeError> {
    let rules = vec![
        rule(
            "refill|prescription|medication|rx|medicine",
            "I'd be happy to help with your refill! Please provide your prescription number \
             or the medication name, and I'll check availability right away. 📋",
        ),
        rule(
            "insurance|coverage|copay",
            "We accept most major insurance plans including Medicare Part D, Medicaid, and \
             private insurance. I can verify your coverage — just share your insurance ID! 🏥",
        ),
        rule(
            "hours|open|close|time",
            "We're open Monday–Friday 9 AM to 6 PM and Saturday 9 AM to 1 PM. Closed Sundays. \
             Need to schedule a pickup? 🕐",
        ),
        rule(
            "transfer|switch|move",
            "Transferring your prescription to us is easy! Just provide your current pharmacy \
             name and Rx number, and we'll handle the rest. Usually takes under 24 hours.",
        ),
        rule(
            "vaccine|immunization|flu|shot|covid",
            "We offer a full range of immunizations including flu, COVID-19, shingles, and \
             pneumonia vaccines. Walk-ins welcome, or I can schedule you a slot! 💉",
        ),
        rule(
            "compound|compounding|custom",
            "Yes! We offer custom compounding services for personalized medications. Our \
             pharmacists work directly with your doctor to create the right formulation for you.",
        ),
        rule(
            "delivery|ship|deliver|mail",
            "We offer free local delivery within Murray! Prescriptions placed before 2 PM are \
             typically delivered same day. Want to set up delivery? 🚗",
        ),
        rule(
            "cost|price|how much|expensive",
            "We work hard to keep prices competitive. Many generics start under $10. I can \
             check specific pricing once I have your medication name and insurance info.",
        ),
        rule_any(
            "hello|hi|hey|good",
            &[
                "Hey there! Great to have you. How can Alex's Family Pharmacy help you today? 😊",
                "Hi! Welcome to Alex's Family Pharmacy. What can I do for you? 😊",
            ],
        ),
        rule(
            "thanks|thank you|appreciate",
            "You're welcome! We're here for you anytime. Is there anything else I can help \
             with? 💜",
        ),
    ];

    Persona::new(
        "Alex's Rx Assistant",
        "💊",
        "Welcome to Alex's Family Pharmacy! 👋 I can help you with prescription refills, \
         medication questions, or finding our services. What do you need today?",
        "Great question! For the best answer, you can call us at (270) 917-1424 or stop by at \
         801 Paramount Drive. Is there anything else I can help with?",
        DEFAULT_ACCENT,
        ResponseTable::new(rules)?,
    )
}
