//! Profession templates keyed by lowercase goal name.

use super::{Phase, ProfessionTemplate};

const fn phase(weeks: &'static str, focus: &'static str, daily_hours: u32) -> Phase {
    Phase {
        weeks,
        focus,
        daily_hours,
    }
}

/// Every supported career goal, in catalog order.
pub static PROFESSIONS: &[ProfessionTemplate] = &[
    ProfessionTemplate {
        key: "software engineer",
        duration_months: 6,
        skills_required: &["Python", "JavaScript", "HTML", "CSS", "SQL", "Flask", "React"],
        phases: &[
            phase("weeks_1_2", "Python Fundamentals", 3),
            phase("weeks_3_4", "Web Development Basics (HTML/CSS)", 3),
            phase("weeks_5_8", "JavaScript & Frontend", 4),
            phase("weeks_9_12", "Backend & Databases", 4),
            phase("weeks_13_20", "Full Stack Projects", 5),
            phase("weeks_21_26", "Portfolio & Interview Prep", 4),
        ],
        milestones: &[
            (2, "Complete Python basics (loops, functions, OOP)"),
            (4, "Build first static website with HTML/CSS"),
            (8, "Master JavaScript and start with React"),
            (12, "Learn SQL and build backend with Flask"),
            (16, "Complete 2-3 full stack mini-projects"),
            (20, "Deploy projects on GitHub and cloud"),
            (26, "Finish portfolio and practice interviews"),
        ],
    },
    ProfessionTemplate {
        key: "backend engineer",
        duration_months: 6,
        skills_required: &[
            "Python/Java",
            "SQL",
            "API Design",
            "Database Design",
            "Docker",
            "Microservices",
        ],
        phases: &[
            phase("weeks_1_2", "Server-side Fundamentals", 3),
            phase("weeks_3_4", "Database Design & SQL", 3),
            phase("weeks_5_8", "API Development", 4),
            phase("weeks_9_12", "Authentication & Security", 4),
            phase("weeks_13_20", "Microservices & Scaling", 5),
            phase("weeks_21_26", "DevOps & Deployment", 4),
        ],
        milestones: &[
            (2, "Master server-side language (Python/Java)"),
            (4, "Design and manage databases"),
            (8, "Build and deploy RESTful APIs"),
            (12, "Implement authentication & authorization"),
            (16, "Design microservices architecture"),
            (20, "Deploy with Docker & orchestration"),
            (26, "Build production-ready backend systems"),
        ],
    },
    ProfessionTemplate {
        key: "frontend developer",
        duration_months: 6,
        skills_required: &[
            "HTML",
            "CSS",
            "JavaScript",
            "React/Vue",
            "UI Design",
            "Responsive Design",
        ],
        phases: &[
            phase("weeks_1_2", "HTML & CSS Fundamentals", 3),
            phase("weeks_3_4", "JavaScript Mastery", 3),
            phase("weeks_5_8", "React/Vue Framework", 4),
            phase("weeks_9_12", "State Management & APIs", 4),
            phase("weeks_13_20", "Performance & Optimization", 5),
            phase("weeks_21_26", "UI/UX & Portfolio Projects", 4),
        ],
        milestones: &[
            (2, "Build semantic HTML & modern CSS"),
            (4, "Master vanilla JavaScript"),
            (8, "Build interactive components with React"),
            (12, "Manage state with Redux/Context"),
            (16, "Optimize performance & bundle size"),
            (20, "Design beautiful, responsive UIs"),
            (26, "Deploy full-stack applications"),
        ],
    },
    ProfessionTemplate {
        key: "web developer",
        duration_months: 6,
        skills_required: &["HTML", "CSS", "JavaScript", "Backend Language", "SQL", "Deployment"],
        phases: &[
            phase("weeks_1_2", "Web Fundamentals", 3),
            phase("weeks_3_4", "Frontend Basics", 3),
            phase("weeks_5_8", "JavaScript & Interactivity", 4),
            phase("weeks_9_12", "Backend & Databases", 4),
            phase("weeks_13_20", "Full Stack Integration", 5),
            phase("weeks_21_26", "Projects & Deployment", 4),
        ],
        milestones: &[
            (2, "Complete web fundamentals"),
            (4, "Build responsive websites"),
            (8, "Make interactive web applications"),
            (12, "Build backend services"),
            (16, "Integrate frontend & backend"),
            (20, "Deploy to production"),
            (26, "Complete full-stack projects"),
        ],
    },
    ProfessionTemplate {
        key: "mobile developer",
        duration_months: 6,
        skills_required: &[
            "React Native/Flutter",
            "Mobile UI",
            "APIs",
            "State Management",
            "Testing",
        ],
        phases: &[
            phase("weeks_1_2", "Mobile Fundamentals", 3),
            phase("weeks_3_4", "React Native Basics", 3),
            phase("weeks_5_8", "Mobile UI & UX", 4),
            phase("weeks_9_12", "API Integration", 4),
            phase("weeks_13_20", "Advanced Features", 5),
            phase("weeks_21_26", "Testing & Deployment", 4),
        ],
        milestones: &[
            (2, "Learn mobile development basics"),
            (4, "Build first mobile app"),
            (8, "Master mobile UI components"),
            (12, "Integrate backend APIs"),
            (16, "Add complex features & state management"),
            (20, "Test and optimize performance"),
            (26, "Deploy apps to stores"),
        ],
    },
    ProfessionTemplate {
        key: "data scientist",
        duration_months: 6,
        skills_required: &["Python", "Pandas", "NumPy", "Machine Learning", "SQL", "Statistics"],
        phases: &[
            phase("weeks_1_2", "Python & Data Manipulation", 3),
            phase("weeks_3_4", "Statistics & Probability", 3),
            phase("weeks_5_8", "Pandas & Data Analysis", 4),
            phase("weeks_9_12", "Machine Learning Algorithms", 4),
            phase("weeks_13_20", "Real-world Projects & Kaggle", 5),
            phase("weeks_21_26", "Portfolio & Interview Prep", 4),
        ],
        milestones: &[
            (2, "Master Python basics and NumPy/Pandas"),
            (4, "Understand statistics and probability"),
            (8, "Complete exploratory data analysis projects"),
            (12, "Master supervised and unsupervised learning"),
            (16, "Complete 3-4 end-to-end ML projects"),
            (20, "Top 500 on Kaggle competitions"),
            (26, "Finish portfolio and case studies"),
        ],
    },
    ProfessionTemplate {
        key: "ai engineer",
        duration_months: 6,
        skills_required: &["Python", "PyTorch", "Transformers", "LLMs", "Prompt Engineering"],
        phases: &[
            phase("weeks_1_2", "Python & Deep Learning Basics", 3),
            phase("weeks_3_4", "Neural Networks & PyTorch", 3),
            phase("weeks_5_8", "Transformers & NLP", 4),
            phase("weeks_9_12", "LLMs & Fine-tuning", 4),
            phase("weeks_13_20", "Prompt Engineering & Deployment", 5),
            phase("weeks_21_26", "AI Projects & Advanced Topics", 4),
        ],
        milestones: &[
            (2, "Deep learning fundamentals with PyTorch"),
            (4, "Build and train neural networks"),
            (8, "Understand transformers and attention"),
            (12, "Fine-tune LLMs for specific tasks"),
            (16, "Create RAG systems and AI applications"),
            (20, "Deploy models with CrewAI or similar"),
            (26, "Finish advanced AI projects"),
        ],
    },
    ProfessionTemplate {
        key: "machine learning engineer",
        duration_months: 6,
        skills_required: &["Python", "Scikit-learn", "TensorFlow", "Model Deployment", "MLOps"],
        phases: &[
            phase("weeks_1_2", "Math Foundations", 3),
            phase("weeks_3_4", "ML Algorithms", 3),
            phase("weeks_5_8", "Deep Learning", 4),
            phase("weeks_9_12", "Model Optimization", 4),
            phase("weeks_13_20", "Production ML Systems", 5),
            phase("weeks_21_26", "MLOps & Scaling", 4),
        ],
        milestones: &[
            (2, "Understand linear algebra & statistics"),
            (4, "Master supervised learning algorithms"),
            (8, "Build neural networks"),
            (12, "Optimize and tune models"),
            (16, "Deploy ML models in production"),
            (20, "Monitor and maintain models"),
            (26, "Build end-to-end ML pipelines"),
        ],
    },
    ProfessionTemplate {
        key: "cloud engineer",
        duration_months: 6,
        skills_required: &["AWS", "Azure", "Docker", "Kubernetes", "Linux", "Terraform"],
        phases: &[
            phase("weeks_1_2", "Linux & Networking Basics", 3),
            phase("weeks_3_4", "Cloud Platform Fundamentals", 3),
            phase("weeks_5_8", "Docker & Containerization", 4),
            phase("weeks_9_12", "Kubernetes & Orchestration", 4),
            phase("weeks_13_20", "Infrastructure as Code", 5),
            phase("weeks_21_26", "Cloud Certifications & Projects", 4),
        ],
        milestones: &[
            (2, "Linux administration and networking basics"),
            (4, "Complete Cloud Platform certification prep"),
            (8, "Master Docker containerization"),
            (12, "Learn Kubernetes for production"),
            (16, "Implement Infrastructure as Code with Terraform"),
            (20, "Deploy multi-tier applications"),
            (26, "Complete cloud certification exams"),
        ],
    },
    ProfessionTemplate {
        key: "devops engineer",
        duration_months: 6,
        skills_required: &["Linux", "Docker", "Kubernetes", "CI/CD", "Terraform", "Monitoring"],
        phases: &[
            phase("weeks_1_2", "Linux & Scripting", 3),
            phase("weeks_3_4", "Git & Version Control", 3),
            phase("weeks_5_8", "Docker & Containerization", 4),
            phase("weeks_9_12", "Kubernetes & Orchestration", 4),
            phase("weeks_13_20", "CI/CD Pipelines", 5),
            phase("weeks_21_26", "IaC & Monitoring", 4),
        ],
        milestones: &[
            (2, "Master Linux and shell scripting"),
            (4, "Learn Git and version control"),
            (8, "Master Docker for containerization"),
            (12, "Implement Kubernetes clusters"),
            (16, "Build CI/CD pipelines"),
            (20, "Implement Infrastructure as Code"),
            (26, "Set up monitoring and logging"),
        ],
    },
    ProfessionTemplate {
        key: "security engineer",
        duration_months: 6,
        skills_required: &[
            "Networking",
            "Cryptography",
            "Penetration Testing",
            "Security Tools",
            "Compliance",
        ],
        phases: &[
            phase("weeks_1_2", "Networking Fundamentals", 3),
            phase("weeks_3_4", "Security Basics", 3),
            phase("weeks_5_8", "Cryptography & Encryption", 4),
            phase("weeks_9_12", "Penetration Testing", 4),
            phase("weeks_13_20", "Security Tools & Techniques", 5),
            phase("weeks_21_26", "Compliance & Certifications", 4),
        ],
        milestones: &[
            (2, "Understand network security fundamentals"),
            (4, "Learn OWASP top 10"),
            (8, "Master cryptography concepts"),
            (12, "Perform basic penetration tests"),
            (16, "Master security tools and frameworks"),
            (20, "Implement security measures"),
            (26, "Prepare for security certifications"),
        ],
    },
    ProfessionTemplate {
        key: "data analyst",
        duration_months: 6,
        skills_required: &[
            "SQL",
            "Excel",
            "Python",
            "Tableau/Power BI",
            "Statistics",
            "Business Acumen",
        ],
        phases: &[
            phase("weeks_1_2", "SQL Fundamentals", 3),
            phase("weeks_3_4", "Excel & Data Tools", 3),
            phase("weeks_5_8", "Python for Data Analysis", 4),
            phase("weeks_9_12", "Data Visualization", 4),
            phase("weeks_13_20", "Analytics & Insights", 5),
            phase("weeks_21_26", "Portfolio & Case Studies", 4),
        ],
        milestones: &[
            (2, "Master SQL queries"),
            (4, "Advanced Excel skills"),
            (8, "Python data manipulation"),
            (12, "Create dashboards & visualizations"),
            (16, "Derive business insights"),
            (20, "Complete end-to-end analyses"),
            (26, "Build analytics portfolio"),
        ],
    },
    ProfessionTemplate {
        key: "game developer",
        duration_months: 6,
        skills_required: &["Game Engine", "C#/C++", "Graphics", "Physics", "Game Design"],
        phases: &[
            phase("weeks_1_2", "Game Development Basics", 3),
            phase("weeks_3_4", "Game Engine Fundamentals", 3),
            phase("weeks_5_8", "2D/3D Graphics", 4),
            phase("weeks_9_12", "Physics & Gameplay", 4),
            phase("weeks_13_20", "Game Development Tools", 5),
            phase("weeks_21_26", "Complete Game Projects", 4),
        ],
        milestones: &[
            (2, "Learn game development concepts"),
            (4, "Create first game prototype"),
            (8, "Master 2D/3D graphics"),
            (12, "Implement game physics"),
            (16, "Add gameplay mechanics"),
            (20, "Optimize game performance"),
            (26, "Release complete game projects"),
        ],
    },
    ProfessionTemplate {
        key: "database administrator",
        duration_months: 6,
        skills_required: &[
            "SQL",
            "Database Design",
            "Backup/Recovery",
            "Performance Tuning",
            "Security",
        ],
        phases: &[
            phase("weeks_1_2", "Database Fundamentals", 3),
            phase("weeks_3_4", "SQL Advanced", 3),
            phase("weeks_5_8", "Database Design", 4),
            phase("weeks_9_12", "Maintenance & Backup", 4),
            phase("weeks_13_20", "Performance & Optimization", 5),
            phase("weeks_21_26", "Security & Compliance", 4),
        ],
        milestones: &[
            (2, "Master SQL queries and optimization"),
            (4, "Learn database architecture"),
            (8, "Design efficient schemas"),
            (12, "Implement backup & recovery"),
            (16, "Optimize database performance"),
            (20, "Ensure database security"),
            (26, "Manage production databases"),
        ],
    },
    ProfessionTemplate {
        key: "product manager",
        duration_months: 6,
        skills_required: &[
            "Product Strategy",
            "User Research",
            "Analytics",
            "Roadmapping",
            "Leadership",
        ],
        phases: &[
            phase("weeks_1_2", "Product Management Basics", 3),
            phase("weeks_3_4", "User Research Methods", 3),
            phase("weeks_5_8", "Product Strategy", 4),
            phase("weeks_9_12", "Roadmapping & Planning", 4),
            phase("weeks_13_20", "Analytics & Metrics", 5),
            phase("weeks_21_26", "Leadership & Communication", 4),
        ],
        milestones: &[
            (2, "Understand product management framework"),
            (4, "Conduct user research"),
            (8, "Define product strategy"),
            (12, "Create product roadmaps"),
            (16, "Track metrics and KPIs"),
            (20, "Lead cross-functional teams"),
            (26, "Launch successful products"),
        ],
    },
    ProfessionTemplate {
        key: "technical writer",
        duration_months: 6,
        skills_required: &[
            "Writing",
            "Technical Concepts",
            "Documentation",
            "Tools",
            "User Experience",
        ],
        phases: &[
            phase("weeks_1_2", "Technical Writing Basics", 3),
            phase("weeks_3_4", "Documentation Standards", 3),
            phase("weeks_5_8", "API Documentation", 4),
            phase("weeks_9_12", "User Guides & Tutorials", 4),
            phase("weeks_13_20", "Technical Tools & Platforms", 5),
            phase("weeks_21_26", "Portfolio & Publishing", 4),
        ],
        milestones: &[
            (2, "Learn technical writing principles"),
            (4, "Create user documentation"),
            (8, "Write API documentation"),
            (12, "Develop comprehensive guides"),
            (16, "Master documentation tools"),
            (20, "Publish technical content"),
            (26, "Build technical writing portfolio"),
        ],
    },
    ProfessionTemplate {
        key: "teacher",
        duration_months: 6,
        skills_required: &[
            "Subject Matter Expertise",
            "Curriculum Design",
            "Classroom Management",
            "Student Assessment",
            "Communication",
            "Educational Technology",
        ],
        phases: &[
            phase("weeks_1_2", "Teaching Fundamentals & Pedagogy", 3),
            phase("weeks_3_4", "Subject Matter Mastery", 3),
            phase("weeks_5_8", "Curriculum Development", 4),
            phase("weeks_9_12", "Instructional Strategies", 4),
            phase("weeks_13_20", "Assessment & Student Evaluation", 5),
            phase("weeks_21_26", "Classroom Management & EdTech", 4),
        ],
        milestones: &[
            (2, "Understand teaching principles and pedagogy"),
            (4, "Master subject content deeply"),
            (8, "Design engaging and effective curricula"),
            (12, "Master diverse instructional methods"),
            (16, "Create effective assessments and rubrics"),
            (20, "Manage diverse classrooms effectively"),
            (26, "Integrate technology and foster student growth"),
        ],
    },
    ProfessionTemplate {
        key: "professor",
        duration_months: 6,
        skills_required: &[
            "Advanced Subject Expertise",
            "Research Methods",
            "Academic Writing",
            "Course Design",
            "Mentoring",
            "Grant Writing",
            "Publishing",
        ],
        phases: &[
            phase("weeks_1_2", "Academic Excellence Foundations", 3),
            phase("weeks_3_4", "Research Methods & Methodology", 3),
            phase("weeks_5_8", "Advanced Course Design", 4),
            phase("weeks_9_12", "Academic Writing & Publishing", 4),
            phase("weeks_13_20", "Research & Grant Writing", 5),
            phase("weeks_21_26", "Mentoring & Academic Leadership", 4),
        ],
        milestones: &[
            (2, "Develop expert-level subject knowledge"),
            (4, "Learn rigorous research methods"),
            (8, "Design graduate-level courses"),
            (12, "Publish academic papers and research"),
            (16, "Write and secure research grants"),
            (20, "Mentor doctoral students and junior scholars"),
            (26, "Establish independent research program"),
        ],
    },
    ProfessionTemplate {
        key: "business manager",
        duration_months: 6,
        skills_required: &[
            "Business Strategy",
            "Financial Management",
            "Leadership",
            "Operations",
            "Project Management",
            "Decision Making",
            "Communication",
        ],
        phases: &[
            phase("weeks_1_2", "Business Fundamentals", 3),
            phase("weeks_3_4", "Financial Analysis & Accounting", 3),
            phase("weeks_5_8", "Strategic Business Planning", 4),
            phase("weeks_9_12", "Operations Management", 4),
            phase("weeks_13_20", "Leadership & Team Management", 5),
            phase("weeks_21_26", "Decision Making & Business Analytics", 4),
        ],
        milestones: &[
            (2, "Understand core business principles"),
            (4, "Master financial management & accounting"),
            (8, "Develop comprehensive strategic plans"),
            (12, "Optimize business operations & efficiency"),
            (16, "Lead high-performance teams"),
            (20, "Make data-driven business decisions"),
            (26, "Drive business growth & innovation"),
        ],
    },
];
