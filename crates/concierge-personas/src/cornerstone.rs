use concierge_core::error::ConciergeError;
use concierge_core::persona::Persona;
use concierge_core::rule::ResponseTable;

use crate::{rule, rule_any, DEFAULT_ACCENT};

/// Cornerstone Chiropractic — two-doctor practice with a pain-assessment flow.
pub fn cornerstone() -> Result<Persona, ConciergeError> {
    let rules = vec![
        rule(
            "book|appointment|schedule|see doctor|visit",
            "Let me check availability! Would you prefer to see Dr. Adam or Dr. Heskett? And \
             what day/time range works best for you? 📅",
        ),
        rule(
            "dr adam|doctor adam|adam",
            "Dr. Adam specializes in sports injuries and spinal rehabilitation. He's available \
             Mon/Wed/Fri. Would you like me to book an appointment with him?",
        ),
        rule(
            "dr heskett|doctor heskett|heskett",
            "Dr. Heskett focuses on family chiropractic care and preventive wellness. She's \
             available Tue/Thu/Sat mornings. Want me to schedule you?",
        ),
        rule(
            "pain|hurt|where|back|neck|shoulder|knee|head",
            "I understand — pain can be really tough. Can you tell me: 1) Where exactly is the \
             pain? 2) How long have you had it? 3) Rate it 1-10? This helps us prepare the \
             best treatment plan for you.",
        ),
        rule(
            "first time|new|never",
            "Welcome to Cornerstone! Your first visit includes a full spinal evaluation, \
             X-rays if needed, and a personalized treatment plan discussion. Allow about 60 \
             minutes. I'll text you intake forms ahead of time!",
        ),
        rule(
            "insurance|coverage|cost",
            "We accept most insurance plans and offer affordable self-pay options. Initial \
             visits are $85, follow-ups at $50. We also have family wellness packages!",
        ),
        rule(
            "hours|open",
            "We're open Mon-Fri 8 AM–6 PM and Saturday 8 AM–12 PM. Closed Sundays. When's \
             good for you?",
        ),
        rule(
            "text|sms|message",
            "You can absolutely text us to book! Just send your preferred date/time and we'll \
             confirm within minutes. This chat interface is a demo of how that experience \
             would work! 📱",
        ),
        rule_any(
            "hello|hi|hey",
            &[
                "Hey! Welcome to Cornerstone Chiropractic. Whether you're dealing with pain or \
                 just want to stay aligned, we're here for you. How can I help? 😊",
                "Hi! You've reached Cornerstone Chiropractic. What brings you in today? 😊",
            ],
        ),
        rule(
            "thanks|thank",
            "My pleasure! Wishing you wellness and comfort. Don't hesitate to reach out \
             anytime. 🌟",
        ),
    ];

    Persona::new(
        "Cornerstone Care AI",
        "🏥",
        "Hello! I'm the Cornerstone Chiropractic virtual assistant. I can help you book with \
         Dr. Adam or Dr. Heskett, answer questions about our treatments, or guide you through \
         our pain assessment. What brings you in today?",
        "That's a great question! I'd recommend speaking with our team directly for the most \
         accurate answer. Would you like me to schedule a call or appointment?",
        DEFAULT_ACCENT,
        ResponseTable::new(rules)?,
    )
}
