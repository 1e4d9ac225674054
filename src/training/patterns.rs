//! Training patterns per corpus tag, misspellings included.

/// Questions about the course catalog.
pub const COURSE_PATTERNS: &[&str] = &[
    "courses",
    "programs",
    "what do you teach",
    "learning programs",
    "technical courses",
    "what can I study",
    "available courses",
    "course catalog",
    "training programs",
    "educational programs",
    "which courses do you have",
    "what programs are available",
    "tell me about your courses",
    "learning opportunities",
    "study programs",
    "educational courses",
    "what corse do you offer",
    "available corse",
    "training corse",
    "what coarses are available",
    "learning corse",
    "tecknical courses",
    "techanical courses",
    "cources available",
    "what corse catalog",
    "training corse programs",
    "eductional programs",
    "lernning programs",
    "studdy programs",
    "wht courses do you have",
    "coursess",
    "programms",
    "teching programs",
    "learnig courses",
];

/// Questions about the internship program.
pub const INTERNSHIP_PATTERNS: &[&str] = &[
    "internship",
    "stipend",
    "work experience",
    "practical training",
    "paid internship",
    "internship program",
    "3 months internship",
    "industrial training",
    "on-job training",
    "work placement",
    "training internship",
    "professional internship",
    "do you provide internship",
    "internship opportunities",
    "internship with stipend",
    "paid training",
    "inership",
    "intership",
    "internsip",
    "intrenship",
    "interenship",
    "insternship",
    "iternship",
    "stiped",
    "stipnd",
    "stipendd",
    "stepend",
    "practicle training",
    "practical trainig",
    "work experiance",
    "work exprience",
    "industral training",
    "onjob training",
    "intership program",
    "3 month intership",
    "paid intership",
];

/// Questions about the organization.
pub const COMPANY_PATTERNS: &[&str] = &[
    "about brainovision",
    "what is brainovision",
    "company information",
    "about company",
    "who are you",
    "tell me about your institute",
    "about your organization",
    "what does brainovision do",
    "brainovision solutions information",
    "about your company",
    "tell me about brainovision",
    "company overview",
    "what kind of institute are you",
    "about brainovison",
    "what is brainovison",
    "compnay information",
    "about compnay",
    "who are u",
    "tell me about your institue",
    "about your organisation",
    "what does brainovison do",
    "brainovison solutions",
    "about your compnay",
    "tell me about brainovison",
    "compnay overview",
    "what kind of institue are you",
    "brainnovision",
    "brainovision",
    "brainovisin",
    "brainovition",
];

/// Questions about contact details.
pub const CONTACT_PATTERNS: &[&str] = &[
    "contact",
    "how to reach",
    "phone number",
    "email",
    "address",
    "location",
    "get in touch",
    "contact details",
    "how to contact",
    "where are you located",
    "office address",
    "phone contact",
    "email address",
    "contact information",
    "how can I reach you",
    "contct",
    "contat",
    "conatct",
    "contactt",
    "how to rech",
    "fone number",
    "phone numbr",
    "phon number",
    "emai",
    "emale",
    "e-mail",
    "adress",
    "locaton",
    "locationn",
    "get in tuch",
    "contact detal",
    "how to contct",
    "where are you locatd",
    "office adress",
    "fone contact",
    "emai address",
    "contact informtion",
    "how can i rech you",
];

/// Questions about the Python program.
pub const PYTHON_PATTERNS: &[&str] = &[
    "python course",
    "python programming",
    "python full stack",
    "python development",
    "learn python",
    "python training",
    "python programming course",
    "full stack python",
    "python web development",
    "django flask",
    "pythn course",
    "pyton course",
    "pythoon course",
    "python corse",
    "pythn programming",
    "pyton programming",
    "pythn development",
    "learn pythn",
    "python trainig",
    "python programing course",
    "full stack pythn",
    "python web devlopment",
    "django flak",
];

/// Questions about the Java program.
pub const JAVA_PATTERNS: &[&str] = &[
    "java course",
    "java programming",
    "java development",
    "learn java",
    "java training",
    "java full stack",
    "core java",
    "advanced java",
    "spring framework",
    "jva course",
    "jaava course",
    "jave course",
    "java corse",
    "jva programming",
    "jaava programming",
    "java devlopment",
    "learn jva",
    "java trainig",
    "core jva",
    "advanced jva",
    "spring framwork",
];

/// Questions about the AI and machine learning program.
pub const AI_ML_PATTERNS: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "ai ml course",
    "ai course",
    "ml course",
    "artificial intelligence course",
    "machine learning course",
    "ai and ml",
    "neural networks",
    "deep learning",
    "computer vision",
    "artifical intelligence",
    "artifical inteligence",
    "artificial inteligence",
    "mashine learning",
    "machine lernning",
    "ai ml corse",
    "ai corse",
    "ml corse",
    "artifical intelligence corse",
    "mashine learning corse",
    "neural netwoks",
    "deep lernning",
    "computer vison",
];

/// Questions about the data science program.
pub const DATA_SCIENCE_PATTERNS: &[&str] = &[
    "data science",
    "data analytics",
    "data science course",
    "data analyst",
    "big data",
    "data analysis",
    "data visualization",
    "data scientist course",
    "data sience",
    "data scence",
    "data science corse",
    "data analist",
    "data analisis",
    "data visualisation",
    "data scientist corse",
    "data sceince",
    "data anylitics",
];

/// Greetings.
pub const GREETING_PATTERNS: &[&str] = &[
    "Hi",
    "Hello",
    "Hey",
    "Good morning",
    "Good afternoon",
    "Good evening",
    "Hi there",
    "Hello there",
    "Hii",
    "Helloo",
    "Hellow",
    "Good afternon",
    "Good evning",
    "Hi ther",
    "Hello ther",
    "Hai",
];

/// Farewells.
pub const GOODBYE_PATTERNS: &[&str] = &[
    "Bye",
    "Goodbye",
    "See you",
    "See ya",
    "I have to go",
    "Bye bye",
    "Take care",
    "Thank you",
    "Thanks",
    "Byee",
    "Goodby",
    "See u",
    "See yaa",
    "I have to goo",
    "Bye byee",
    "Thank u",
    "Thankss",
    "Thanx",
];

/// Questions about the website itself.
pub const WEBSITE_PATTERNS: &[&str] = &[
    "website",
    "online",
    "portal",
    "web page",
    "brainovision website",
    "official website",
    "websit",
    "webite",
    "oneline",
    "portl",
    "brainovison website",
    "oficial website",
    "webportal",
    "onlain",
];

/// Expressions of gratitude.
pub const THANKS_PATTERNS: &[&str] = &[
    "thank you",
    "thanks",
    "thank you very much",
    "appreciate it",
    "thanks a lot",
    "grateful",
    "thank you so much",
    "thank u",
    "thankss",
    "thank you very mch",
    "apreciate it",
    "thanks alot",
    "greatful",
    "thank you so mch",
    "thanx",
    "thnks",
    "thnx",
];
