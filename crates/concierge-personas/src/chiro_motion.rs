use concierge_core::error::ConciergeError;
use concierge_core::persona::Persona;
use concierge_core::rule::ResponseTable;

use crate::{rule, rule_any, DEFAULT_ACCENT};

/// ChiroMotion Spine & Wellness — appointment booking and insurance intake.
pub fn chiro_motion() -> Result<Persona, ConciergeError> {
    let rules = vec![
        rule(
            "book|appointment|schedule|available|slot|opening",
            "I'd love to get you scheduled! We have openings this week. Do you prefer morning \
             (9-12) or afternoon (1-5)? And is this your first visit with us? 📅",
        ),
        rule(
            "first visit|new patient|never been",
            "Welcome! For new patients, your first visit includes a comprehensive evaluation \
             and consultation. It typically takes about 45 minutes. I'll also send you digital \
             intake forms to save time! 📋",
        ),
        rule(
            "pain|hurt|ache|sore|back|neck|headache",
            "I'm sorry you're dealing with that! Our doctors specialize in pain management \
             through spinal adjustments and therapeutic techniques. Let me book you in — are \
             you available this week?",
        ),
        rule(
            "insurance|coverage|accept|plan",
            "We accept most major insurance plans including Blue Cross, Aetna, United \
             Healthcare, and Medicare. I can verify your benefits before your visit — just \
             share your member ID.",
        ),
        rule(
            "hours|open|when",
            "Our office hours are Monday, Wednesday, Friday 8 AM–5 PM and Tuesday, Thursday \
             10 AM–6 PM. Which day works best for you?",
        ),
        rule(
            "cost|price|how much|without insurance|cash",
            "For self-pay patients, initial consultations are $75 and follow-up adjustments \
             are $45. We also offer affordable wellness packages!",
        ),
        rule(
            "cancel|reschedule|change",
            "No problem! I can reschedule your appointment. Please provide your name or \
             appointment date, and I'll find your booking.",
        ),
        rule(
            "hello|hi|hey",
            "Hi there! Ready to feel your best? I can help you book an adjustment, answer \
             insurance questions, or guide you to the right service. 😊",
        ),
        rule_any(
            "thanks|thank you",
            &[
                "Absolutely! Take care of yourself, and we'll see you at the office. 💪",
                "Anytime! Wishing you a pain-free week — see you soon. 💪",
            ],
        ),
    ];

    Persona::new(
        "Booking Assistant",
        "🦴",
        "Welcome! I'm your AI scheduling assistant. I can book appointments, answer questions \
         about our services, or help with insurance inquiries. How can I help?",
        "That's a great question! For the most detailed answer, you can reach us at \
         (270) 227-5563 or email chiromotionspine@icloud.com. Anything else I can help with?",
        DEFAULT_ACCENT,
        ResponseTable::new(rules)?,
    )
}
