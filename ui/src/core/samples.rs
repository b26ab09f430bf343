//! Static labelled tweets standing in for a live backend during demos.
//!
//! The set is deliberately small and fixed: two positive, two negative, one
//! neutral, with mixed verified flags, so derived percentages land on clean
//! 40/40/20 splits.

use super::model::{Sentiment, Tweet};

pub fn sample_tweets() -> Vec<Tweet> {
    vec![
        Tweet {
            id: "1".into(),
            user: "techguru_dev".into(),
            text: "Just discovered this amazing new framework! The developer experience is incredible 🚀 #webdev #react".into(),
            sentiment: Sentiment::Positive,
            likes: 142,
            reposts: 32,
            replies: 18,
            timestamp: "2024-01-15T10:30:00Z".into(),
            verified: true,
        },
        Tweet {
            id: "2".into(),
            user: "frustrated_coder".into(),
            text: "Spent 6 hours debugging this issue only to find out it was a missing semicolon... 😤 #debugging #programming".into(),
            sentiment: Sentiment::Negative,
            likes: 89,
            reposts: 15,
            replies: 23,
            timestamp: "2024-01-15T11:15:00Z".into(),
            verified: false,
        },
        Tweet {
            id: "3".into(),
            user: "neutral_observer".into(),
            text: "The new update includes several performance improvements and bug fixes. Release notes are available on GitHub.".into(),
            sentiment: Sentiment::Neutral,
            likes: 45,
            reposts: 8,
            replies: 5,
            timestamp: "2024-01-15T12:00:00Z".into(),
            verified: true,
        },
        Tweet {
            id: "4".into(),
            user: "happy_developer".into(),
            text: "Finally shipped the feature I've been working on for weeks! The team collaboration was fantastic 💪 #teamwork".into(),
            sentiment: Sentiment::Positive,
            likes: 203,
            reposts: 67,
            replies: 34,
            timestamp: "2024-01-15T13:45:00Z".into(),
            verified: false,
        },
        Tweet {
            id: "5".into(),
            user: "concerned_user".into(),
            text: "The latest security vulnerability is quite concerning. Hope they patch it soon. #security #cybersecurity".into(),
            sentiment: Sentiment::Negative,
            likes: 76,
            reposts: 28,
            replies: 12,
            timestamp: "2024-01-15T14:20:00Z".into(),
            verified: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_set_shape_is_stable() {
        let tweets = sample_tweets();
        assert_eq!(tweets.len(), 5);

        let positive = tweets
            .iter()
            .filter(|t| t.sentiment == Sentiment::Positive)
            .count();
        let negative = tweets
            .iter()
            .filter(|t| t.sentiment == Sentiment::Negative)
            .count();
        let neutral = tweets
            .iter()
            .filter(|t| t.sentiment == Sentiment::Neutral)
            .count();
        assert_eq!((positive, negative, neutral), (2, 2, 1));

        let ids: HashSet<_> = tweets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tweets.len(), "sample ids must be unique");

        assert!(tweets.iter().any(|t| t.verified));
        assert!(tweets.iter().any(|t| !t.verified));
    }
}
