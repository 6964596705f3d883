// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Immutable in-memory dataset served by both demo APIs.
//!
//! Built once at startup and shared via `Arc`; nothing mutates it after
//! construction, so both servers can read it without coordination.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub content: String,
    pub likes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: u32,
    pub post_id: u32,
    pub author: String,
    pub text: String,
}

/// The fixed dataset: 5 users, 5 posts each, 100 comments cycling over
/// the posts.
#[derive(Debug)]
pub struct Fixture {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Fixture {
    /// Construct the demo dataset.
    pub fn seed() -> Self {
        let users = vec![
            user(1, "Alice Johnson", "alice@example.com", 28, "New York", "USA"),
            user(2, "Bob Smith", "bob@example.com", 35, "London", "UK"),
            user(3, "Carol White", "carol@example.com", 42, "Toronto", "Canada"),
            user(4, "David Brown", "david@example.com", 31, "Sydney", "Australia"),
            user(5, "Eve Davis", "eve@example.com", 26, "Berlin", "Germany"),
        ];

        let posts = vec![
            post(1, 1, "Getting Started with GraphQL", "GraphQL is amazing...", 42),
            post(2, 1, "REST vs GraphQL", "Let's compare...", 35),
            post(3, 1, "API Design Best Practices", "Here are some tips...", 58),
            post(4, 1, "Microservices Architecture", "Breaking down monoliths...", 67),
            post(5, 1, "Database Optimization", "Speed up your queries...", 44),
            post(6, 2, "Python for Beginners", "Start your journey...", 91),
            post(7, 2, "Advanced Python Techniques", "Level up your skills...", 73),
            post(8, 2, "Testing in Python", "Write better tests...", 52),
            post(9, 2, "Async Programming", "Master async/await...", 65),
            post(10, 2, "Data Science with Python", "Analyze your data...", 88),
            post(11, 3, "Web Security Fundamentals", "Protect your apps...", 102),
            post(12, 3, "OAuth 2.0 Explained", "Authentication done right...", 76),
            post(13, 3, "DevOps Best Practices", "CI/CD pipelines...", 84),
            post(14, 3, "Docker for Developers", "Containerize everything...", 95),
            post(15, 3, "Kubernetes Basics", "Orchestrate your containers...", 71),
            post(16, 4, "React Hooks Deep Dive", "Modern React patterns...", 108),
            post(17, 4, "State Management in React", "Redux vs Context...", 93),
            post(18, 4, "TypeScript for React", "Type safety matters...", 87),
            post(19, 4, "Next.js Guide", "Server-side rendering...", 79),
            post(20, 4, "Frontend Performance", "Optimize your apps...", 61),
            post(21, 5, "Machine Learning Intro", "AI for everyone...", 134),
            post(22, 5, "Neural Networks", "Deep learning basics...", 112),
            post(23, 5, "Natural Language Processing", "Text analysis...", 98),
            post(24, 5, "Computer Vision", "Image recognition...", 105),
            post(25, 5, "AI Ethics", "Responsible AI...", 89),
        ];

        let comments = (1..=100)
            .map(|i| Comment {
                id: i,
                post_id: (i % 25) + 1,
                author: format!("User{}", i % 10),
                text: format!("Great post! Comment {}", i),
            })
            .collect();

        Self {
            users,
            posts,
            comments,
        }
    }

    pub fn user_by_id(&self, user_id: u32) -> Option<User> {
        self.users.iter().find(|u| u.id == user_id).cloned()
    }

    pub fn all_users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn posts_by_user(&self, user_id: u32, limit: Option<usize>) -> Vec<Post> {
        let posts = self.posts.iter().filter(|p| p.user_id == user_id).cloned();
        match limit {
            Some(limit) => posts.take(limit).collect(),
            None => posts.collect(),
        }
    }

    pub fn comments_by_post(&self, post_id: u32, limit: Option<usize>) -> Vec<Comment> {
        let comments = self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned();
        match limit {
            Some(limit) => comments.take(limit).collect(),
            None => comments.collect(),
        }
    }
}

fn user(id: u32, name: &str, email: &str, age: u32, city: &str, country: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        age,
        city: city.to_string(),
        country: country.to_string(),
    }
}

fn post(id: u32, user_id: u32, title: &str, content: &str, likes: u32) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        content: content.to_string(),
        likes,
    }
}
