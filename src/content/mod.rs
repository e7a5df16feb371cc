// SPDX-License-Identifier: MPL-2.0
//! Authored portfolio content.
//!
//! Everything here is compiled in and read-only. Local image references are
//! resolved against the configured image directory at load time.

use crate::domain::filter::ALL;
use crate::domain::profile::{Achievement, Profile, SocialKind, SocialLink, TimelineEntry};
use crate::domain::project::{Category, ProjectRecord, ShowcaseProject};
use crate::domain::skill::Skill;

pub const PROFILE: Profile = Profile {
    name: "Sudharsan Aravind",
    headline: "Software Engineer",
    bio: "I'm a technology enthusiast with a background in designing and developing \
          scalable applications from a young age. Along with an academic background in \
          Data Science, I have a unique blend of strong foundation in Machine Learning \
          and Software Engineering. I love to work in a collaborative team environment \
          and also have good experience as both team player and team leader in multiple \
          projects. My goal is to provide innovative solutions that are efficient and \
          sustainable, contributing to the growth and success of an organization where \
          I can apply my skills effectively while committing to both my personal and \
          professional development.",
    email: "vsaravind01@gmail.com",
    location: "Bangalore, Karnataka",
    degree: "Master of Science in Data Science",
    experience: "2 years (Professional) & 5 years (Technical Projects)",
    resume: "https://drive.google.com/file/d/1MR95Ms7kMeQNNAll7qo8p5GjFlLWbkJS/view?usp=drive_link",
    portrait: "/img/sudharsan-aravind-hq-nobg.png",
    site: "vsaravind.me",
};

pub const TAGLINES: &[&str] = &[
    "Backend Developer",
    "Software Engineer",
    "Machine Learning Engineer",
    "Full-Stack Developer",
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::X,
        url: "https://x.com/vsaravind01",
    },
    SocialLink {
        kind: SocialKind::GitHub,
        url: "https://github.com/vsaravind01",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        url: "https://www.linkedin.com/in/sudharsan-aravind-v-18826a1aa/",
    },
    SocialLink {
        kind: SocialKind::Instagram,
        url: "https://www.instagram.com/sudharsan_aravind/",
    },
    SocialLink {
        kind: SocialKind::Spotify,
        url: "https://open.spotify.com/artist/1KW8TZuz26oJew8u6aPBxI",
    },
];

pub const WORK: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Software Engineer Consultant",
        organization: "Deep Forest Sciences",
        organization_url: Some("https://deepforestsci.com"),
        date: "March, 2023 - March, 2024",
        content: "One of the core developers of Prithvi, a next generation AI system that \
                  dramatically accelerates scientific discovery for human benefit.",
    },
    TimelineEntry {
        title: "Engineer Intern",
        organization: "Commvault",
        organization_url: Some("https://www.commvault.com/"),
        date: "December, 2024 - Current",
        content: "Intern in Database team at Commvault, Bangalore.",
    },
];

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Master of Science in Data Science",
        organization: "PSG College of Technology",
        organization_url: None,
        date: "2020 - 2025",
        content: "CGPA: 8.27",
    },
    TimelineEntry {
        title: "Higher Secondary Education",
        organization: "SBOA Matric. and Hr. Sec. School",
        organization_url: None,
        date: "2018 - 2020",
        content: "Percentage: 88.5%",
    },
    TimelineEntry {
        title: "Secondary School (SSLC)",
        organization: "SBOA Matric. and Hr. Sec. School",
        organization_url: None,
        date: "2017 - 2018",
        content: "Percentage: 93.8%",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Finalist - Bank of Baroda Generative AI Hackathon",
        organization: "Bank of Baroda & Microsoft Azure",
        date: "July, 2024 - September 2024",
        description: "Top 10 finalist among 21000+ participants in a Fin-Tech hackathon \
                      conducted by Bank of Baroda and Microsoft Azure. My team worked on a \
                      solution to provide personalized investment strategies and data-driven \
                      financial advice to the bank customers using Generative AI.",
    },
    Achievement {
        title: "Finalist - Health Hackathon",
        organization: "IIIT Sri City",
        date: "December, 2023",
        description: "Finalist in a health hackathon conducted by IIIT Sri City. Our team \
                      devised a solution to assist the patients to detect the symptoms of \
                      heart diseases using Machine Learning and Generative AI.",
    },
    Achievement {
        title: "Winner - Smart India Hackathon Senior Software Edition",
        organization: "Ministry of Education, India",
        date: "August, 2022",
        description: "Winner and Team Lead of Smart India Hackathon 2022 held by AICTE. Our \
                      team built a semantic search engine for the Parliament of India and a \
                      built-in management portal to effectively maintain and supervise the \
                      Parliament records. I was the team lead and the solution architect of \
                      the project.",
    },
    Achievement {
        title: "Winner - Decode",
        organization: "PSG College of Technology",
        date: "January, 2022",
        description: "One of the top 3 winners in a competitive coding contest conducted among \
                      participants from various computer science branches at university level.",
    },
    Achievement {
        title: "Creative Coder Award",
        organization: "Let's Code by KGISL Institute of Technology",
        date: "October 2019",
        description: "Creative Coder Award in Let's Code, a protoype building hackathon hosted \
                      by KGISL Institute of Technology.",
    },
];

pub const CATEGORIES: &[Category] = &[
    Category {
        tag: ALL,
        label: "All",
    },
    Category {
        tag: "parliament",
        label: "Parliament Connect",
    },
    Category {
        tag: "ayush",
        label: "Ayush Connect",
    },
    Category {
        tag: "smart-wealth",
        label: "Smart Wealth",
    },
    Category {
        tag: "picwiz",
        label: "PicWiz AI",
    },
    Category {
        tag: "chequer",
        label: "Chequer",
    },
];

pub const GALLERY: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "Parliament Connect",
        description: "A digital platform for the Parliament of India, to search through the \
                      Parliament question records and help reduce redundant questions.",
        image: "/img/parliament-connect.png",
        categories: &["parliament"],
        technologies: &[
            "Python",
            "React",
            "Node.js",
            "MongoDB",
            "AWS",
            "Express.js",
            "Elasticsearch",
            "Flask",
        ],
        github: None,
        live: None,
    },
    ProjectRecord {
        id: 2,
        title: "Semantic Search Engine",
        description: "Semantic search engine capable of handling multi-lingual and semantic \
                      aware queries.",
        image: "/img/backend-1.png",
        categories: &["parliament"],
        technologies: &[
            "Flask",
            "AWS",
            "Microservices",
            "Sentence-transformers",
            "Elasticsearch",
        ],
        github: None,
        live: None,
    },
    ProjectRecord {
        id: 3,
        title: "Ayush Connect",
        description: "Healthcare platform integrating traditional Ayurvedic medicine with \
                      modern healthcare systems and patient management.",
        image: "/img/Ayush-Connect.png",
        categories: &["ayush"],
        technologies: &[
            "Generative AI",
            "Computer Vision",
            "Vision transformers",
            "LLM",
            "FastAPI",
            "PostgreSQL",
            "Python",
            "Flutter",
            "Pytorch",
            "Web Scrapping",
        ],
        github: Some("https://github.com/vsaravind01/ayush-connect"),
        live: None,
    },
    ProjectRecord {
        id: 4,
        title: "CNN Few Shot Learning",
        description: "Implementation of few-shot learning algorithms for convolutional neural \
                      networks to enable training with minimal data samples.",
        image: "/img/cnn-few-shot-learning.png",
        categories: &["ayush"],
        technologies: &["Deep Learning", "CNN", "Python", "TensorFlow", "PyTorch"],
        github: None,
        live: None,
    },
    ProjectRecord {
        id: 5,
        title: "PicWiz AI Architecture",
        description: "AI-powered image processing system with advanced recognition \
                      capabilities and intelligent query engine.",
        image: "/img/picwiz-ai-architecture.png",
        categories: &["picwiz"],
        technologies: &[
            "Computer vision",
            "Detectron-2",
            "Facenet",
            "Retina Face",
            "TensorFlow",
            "Pytorch",
            "Python",
            "Google Cloud Storage",
            "PostgreSQL",
            "MongoDB",
            "Object Oriented Programming",
        ],
        github: Some("https://github.com/vsaravind01/PicWiz-AI"),
        live: None,
    },
    ProjectRecord {
        id: 6,
        title: "Agent Architecture for Smart Wealth",
        description: "Multi-agent system architecture for intelligent financial planning and \
                      wealth management automation.",
        image: "/img/agent-arch-smart-wealth.png",
        categories: &["smart-wealth"],
        technologies: SMART_WEALTH_STACK,
        github: None,
        live: None,
    },
    ProjectRecord {
        id: 7,
        title: "Smart Wealth",
        description: "Intelligent financial planning platform using AI to provide \
                      personalized wealth management strategies.",
        image: "/img/smart-wealth.png",
        categories: &["smart-wealth"],
        technologies: SMART_WEALTH_STACK,
        github: None,
        live: None,
    },
    ProjectRecord {
        id: 8,
        title: "Chequer",
        description: "Automated code quality checker with integrated CI/CD capabilities for \
                      enterprise software development.",
        image: "/img/chequer.webp",
        categories: &["chequer"],
        technologies: &[
            "Python",
            "Yolov9",
            "Amazon Textract",
            "FastAPI",
            "PostgreSQL",
            "Async-Programming",
        ],
        github: Some("https://github.com/vsaravind01/chequer"),
        live: None,
    },
];

const SMART_WEALTH_STACK: &[&str] = &[
    "LangGraph",
    "GPT-4o",
    "OpenAI",
    "Python",
    "FastAPI",
    "Microsoft Azure",
    "Cosmos DB",
    "React.js",
    "Deep Reinforcement Learning",
    "DBSCAN",
];

pub const SHOWCASE: &[ShowcaseProject] = &[
    ShowcaseProject {
        title: "PicWiz AI",
        description: "PicWiz AI is an end to end AI-powered photo management platform which is \
                      capable of automatically tagging photos based on objects, recognize \
                      familiar faces, and also generate an album based on a user requirement.",
        technologies: &[
            "Python",
            "FastAPI",
            "PostgreSQL",
            "MongoDB",
            "Qdrant",
            "Generative AI",
            "Deep Learning",
            "Face Detection",
            "Scene Detection",
            "Object Detection",
            "PyTorch",
            "Google Cloud Platform",
        ],
        github: Some("https://github.com/vsaravind01/PicWiz-AI"),
        live: None,
        image: Some("/img/picwiz-ai-architecture.png"),
        featured: true,
    },
    ShowcaseProject {
        title: "The Parliament Connect",
        description: "EPACS - Effective Parliament Archive Connect System, a fully featured \
                      semantic search engine, tailor made for the Parliament of India as a part \
                      of Smart India Hackathon 2022 grand finale.",
        technologies: &[
            "Python",
            "JavaScript",
            "Flask",
            "Node.js",
            "React.js",
            "Elasticsearch",
            "PostgreSQL",
            "sentence-transformers",
            "AWS",
        ],
        github: Some("https://github.com/vsaravind01/Parliament-Connect"),
        live: None,
        image: Some("/img/parliament-connect.png"),
        featured: false,
    },
    ShowcaseProject {
        title: "Smart Wealth",
        description: "Smart Wealth is an AI-powered multi-agent financial advisor that delivers \
                      personalized, data-driven investment strategies using GPT-4o.",
        technologies: &[
            "Python",
            "LangGraph",
            "GPT-4o",
            "FastAPI",
            "Microsoft Azure",
            "Cosmos DB",
            "MongoDB",
            "React.js",
            "Deep Reinforcement Learning",
            "DBSCAN",
        ],
        github: Some("https://github.com/vsaravind01/Smart-Wealth"),
        live: None,
        image: Some("/img/agent-arch-smart-wealth.png"),
        featured: true,
    },
    ShowcaseProject {
        title: "MarkAnn",
        description: "A Telegram bot that provides real-time press releases from the companies \
                      listed on Bombay Stock Exchange (BSE).",
        technologies: &[
            "Python",
            "Generative AI",
            "Async-Programming",
            "WebSocket",
            "FastAPI",
            "Qdrant",
            "AWS",
            "GitHub Actions(CD)",
        ],
        github: Some("https://github.com/vsaravind01/MarkAnn-Bot"),
        live: None,
        image: None,
        featured: false,
    },
    ShowcaseProject {
        title: "The Ayush Connect",
        description: "An AI powered platform that provides information about Ayurvedic \
                      medicinal plants for the Ayurvedic pharmaceutical industry.",
        technologies: &[
            "Python",
            "Generative AI",
            "Vision Transformers",
            "FastAPI",
            "PostgreSQL",
            "Qdrant",
            "Flutter",
        ],
        github: Some("https://github.com/vsaravind01/Ayush-Connect"),
        live: None,
        image: Some("/img/Ayush-Connect.png"),
        featured: false,
    },
    ShowcaseProject {
        title: "Chequer",
        description: "Chequer is a modern and efficient solution for automating the cheque \
                      clearing process.",
        technologies: &[
            "Python",
            "YoloV9",
            "Amazon Textract",
            "FastAPI",
            "PostgreSQL",
            "Async-Programming",
        ],
        github: Some("https://github.com/vsaravind01/Chequer"),
        live: None,
        image: Some("/img/chequer.webp"),
        featured: false,
    },
    ShowcaseProject {
        title: "RL Portfolio Allocator",
        description: "A portfolio allocation system that uses Reinforcement Learning to \
                      optimize the portfolio allocation strategy.",
        technologies: &["Python", "Reinforcement Learning", "Streamlit"],
        github: Some("https://github.com/vsaravind01/RL-Portfolio-Allocator"),
        live: None,
        image: None,
        featured: false,
    },
];

macro_rules! skill {
    ($name:literal, $rating:literal, $icon:literal) => {
        Skill {
            name: $name,
            rating: $rating,
            icon: concat!("https://skillicons.dev/icons?i=", $icon),
        }
    };
}

pub const SKILLS: &[Skill] = &[
    skill!("Python", 5.0, "python"),
    skill!("FastAPI", 5.0, "fastapi"),
    skill!("AWS", 4.0, "aws"),
    skill!("PostgreSQL", 3.5, "postgres"),
    skill!("Docker", 4.0, "docker"),
    skill!("TypeScript", 3.5, "ts"),
    skill!("React", 4.5, "react"),
    skill!("Next.js", 4.0, "nextjs"),
    skill!("Node.js", 4.0, "nodejs"),
    skill!("Django", 4.0, "django"),
    skill!("MongoDB", 3.5, "mongodb"),
    skill!("Terraform", 3.0, "terraform"),
    skill!("Git", 4.5, "git"),
    skill!("TensorFlow", 3.0, "tensorflow"),
    skill!("Golang", 3.0, "go"),
    skill!("Nest.js", 2.0, "nest"),
    skill!("Flutter", 3.0, "flutter"),
    skill!("MySQL", 4.0, "mysql"),
    skill!("Elasticsearch", 3.0, "elasticsearch"),
    skill!("Kafka", 3.0, "kafka"),
];

/// Tag cloud below the skill cards, pipe-delimited.
pub const OTHER_SKILLS: &str = "REST APIs | Elasticsearch | Computer Vision | NLP | \
                                Generative AI | Agentic AI | RAG | ReAct | LangChain | \
                                LlamaIndex | CI/CD | GitHub Actions | Microservices | Redis";
