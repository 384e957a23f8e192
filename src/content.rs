//! Page Text
//!
//! The fixed reasons and wishes. Order is significant: card numbers are
//! 1-based positions in these lists.

pub static REASONS: [&str; 26] = [
    "Because you became my light during a very dark period of my life. 🌟",
    "Because you're my safe place. 🏠",
    "Because you challenge me to be better. 💫",
    "Because of your kind and caring heart. 💖",
    "Because you're incredibly handsome. 😍",
    "Because you're my biggest supporter. 📣",
    "Because you make me laugh with your wack jokes. 😹",
    "Because your presence on it's own is enough to comfort me when I'm feeling low. 🤗",
    "Because somehow you manage to get on my very last nerve and then still be able to make all that frustration melt away. 🥲",
    "Because you're so thoughtful and considerate (but only when you want to be...👀). 💭",
    "Because you're strong yet so gentle. 🦁",
    "Because you literally opened me up to a world adventure that I did not know existed. 🤯",
    "Because you were My First in so many ways. 🥹",
    "Because you're my man. 😏",
    "Because you handle the inner child in me with love. 😊",
    "Because you're the best listener. 👂",
    "Because you make me happy. 🙃",
    "Because you when I'm with you ordinary moments feel magical. ✨",
    "Because you're my answered prayer. 🙏",
    "Because you have the most beautiful soul. 💫",
    "Because you love me even though you've seen my ugly parts. 💕",
    "Because you're my favorite person to talk to. 💬",
    "Because you make me feel loved and protected when I'm with you. 💝",
    "Because you're an incredible leader. 👑",
    "Because you're the father of my children. 💑",
    "Because you're the love of my life. ❤️",
];

pub static WISHES: [&str; 26] = [
    "I wish for your faith to grow stronger each day.",
    "I wish for you peace that surpasses understanding.",
    "I wish for you wisdom to lead with love.",
    "I wish for your heart to be filled with joy.",
    "I wish for you to always feel God's presence and hear His voice when He speaks.",
    "I wish for your dreams to flourish beyond anything you could have ever imagined.",
    "I wish for your health to be strong and enduring.",
    "I wish for your mind to be sharp, wise and creative.",
    "I wish for your spirit to be resilient in challenges.",
    "I wish for your laughter to echo through our home and every room you walk into.",
    "I wish for your kindness to touch many lives.",
    "I wish for your patience to bear many beautiful fruit.",
    "I wish for your generosity to be returned to you a hundredfold.",
    "I wish for your courage to face any obstacle that comes your way.",
    "I wish for your love to deepen with each passing year.",
    "I wish for your hope to never fade.",
    "I wish for your abundant success in all your endeavors.",
    "I wish for your friendships to be true, meaningful and lasting.",
    "I wish for your heart to always feel cherished.",
    "I wish for your soul to find rest in God's grace.",
    "I wish for your days to be filled with purpose and fulfillment.",
    "I wish for your nights to be peaceful and restorative.",
    "I wish for your voice to be heard, valued and respected.",
    "I wish for your presence to bring comfort to others (mostly me).",
    "I wish for your life to be a beautiful testimony.",
    "I wish for our love to grow stronger with each birthday.",
];
