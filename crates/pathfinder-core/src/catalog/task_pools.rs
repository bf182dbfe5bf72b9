//! Task-text pools keyed by phase focus label.
//!
//! A phase longer than its pool cycles back to the first entry.

/// Pools in lookup order. Fuzzy matching walks this list front to back.
pub static TASK_POOLS: &[(&str, &[&str])] = &[
    (
        "Python Fundamentals",
        &[
            "Learn variables, data types, and basic operations",
            "Practice control flow: if/else statements",
            "Master loops: for and while loops with exercises",
            "Build functions: definition, parameters, return values",
            "Work on list and dictionary operations",
            "Understand strings and string manipulation",
            "Practice with 5-10 small coding challenges",
            "Build a simple calculator program",
        ],
    ),
    (
        "Web Development Basics (HTML/CSS)",
        &[
            "Learn HTML semantic elements and structure",
            "Build a personal portfolio webpage",
            "Master CSS selectors and styling",
            "Create a multi-page website with navigation",
            "Practice CSS flexbox and grid layout",
            "Implement responsive design with media queries",
            "Build a landing page with animations",
        ],
    ),
    (
        "JavaScript & Frontend",
        &[
            "Learn JavaScript variables and data types",
            "Master JavaScript DOM manipulation",
            "Build interactive web components",
            "Learn event handling and callbacks",
            "Understand array methods and ES6 features",
            "Build a todo app with JavaScript",
            "Learn async/await and promises",
        ],
    ),
    (
        "Backend & Databases",
        &[
            "Learn SQL basics: SELECT, INSERT, UPDATE, DELETE",
            "Design database schemas and relationships",
            "Build REST APIs with Flask/Django",
            "Implement database migrations",
            "Learn about authentication and security",
            "Build a complete backend with user system",
        ],
    ),
    (
        "Python & Data Manipulation",
        &[
            "Master Python NumPy arrays and operations",
            "Learn Pandas data frames and series",
            "Practice data cleaning and preprocessing",
            "Work with CSV and JSON files",
            "Create data visualizations with Matplotlib",
        ],
    ),
    (
        "Machine Learning Algorithms",
        &[
            "Understand linear regression from scratch",
            "Learn logistic regression and classification",
            "Master decision trees and random forests",
            "Study neural networks basics",
            "Implement algorithms from scratch",
            "Use scikit-learn for practical ML",
        ],
    ),
];
