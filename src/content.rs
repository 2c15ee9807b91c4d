//! Copy for the marketing pages.

use adfoundry_contact::Service;

pub const TAGLINE: &str = "Ideas that sell, stories that stay";

pub struct ServiceDetail {
    pub service: Service,
    pub description: &'static str,
    /// Short list shown on the services overview.
    pub features: &'static [&'static str],
    pub intro: &'static str,
    pub capabilities: &'static [Capability],
    pub offerings: &'static [Section<Offering>],
    pub process: Option<Section<ProcessStep>>,
    pub case_study: Option<CaseStudy>,
    pub cta: CallToAction,
}

impl ServiceDetail {
    pub fn title(&self) -> &'static str {
        self.service.into()
    }

    pub fn slug(&self) -> &'static str {
        self.service.slug()
    }
}

pub struct Section<T: 'static> {
    pub heading: &'static str,
    pub entries: &'static [T],
}

/// Feature card on a service page.
pub struct Capability {
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

/// A concrete deliverable, platform or content type. `items` may be empty.
pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Metric {
    pub metric: &'static str,
    pub label: &'static str,
}

pub struct CaseStudy {
    pub heading: &'static str,
    pub summary: &'static str,
    pub metrics: &'static [Metric],
}

pub struct CallToAction {
    pub heading: &'static str,
    pub text: &'static str,
    pub label: &'static str,
}

pub static SERVICES: [ServiceDetail; 6] = [
    ServiceDetail {
        service: Service::DigitalMarketing,
        description: "Comprehensive digital strategies that transform your online presence into a powerful storytelling platform.",
        features: &[
            "Strategic Planning",
            "Campaign Management",
            "Multi-channel Integration",
            "ROI Optimization",
        ],
        intro: "Transform your online presence into a powerful storytelling platform that captivates audiences and drives measurable results across all digital channels.",
        capabilities: &[
            Capability {
                title: "Strategic Planning",
                description: "Comprehensive digital strategies tailored to your brand's unique story and business objectives.",
                benefits: &["Market Analysis", "Competitor Research", "Goal Setting", "KPI Definition"],
            },
            Capability {
                title: "Campaign Management",
                description: "End-to-end campaign execution with continuous monitoring and optimization for maximum impact.",
                benefits: &["Campaign Setup", "Performance Tracking", "Real-time Optimization", "Reporting"],
            },
            Capability {
                title: "Multi-channel Integration",
                description: "Seamless coordination across all digital platforms to ensure consistent brand messaging.",
                benefits: &["Cross-platform Strategy", "Unified Messaging", "Channel Optimization", "Audience Targeting"],
            },
        ],
        offerings: &[],
        process: Some(Section {
            heading: "Our Digital Marketing Process",
            entries: &[
                ProcessStep {
                    step: "01",
                    title: "Discovery & Analysis",
                    description: "We dive deep into your brand, audience, and market to understand your unique position.",
                },
                ProcessStep {
                    step: "02",
                    title: "Strategy Development",
                    description: "Create a comprehensive digital marketing strategy aligned with your business goals.",
                },
                ProcessStep {
                    step: "03",
                    title: "Implementation",
                    description: "Execute campaigns across multiple channels with precision and creativity.",
                },
                ProcessStep {
                    step: "04",
                    title: "Optimization",
                    description: "Continuously monitor, analyze, and optimize for better performance and ROI.",
                },
            ],
        }),
        case_study: None,
        cta: CallToAction {
            heading: "Ready to Transform Your Digital Presence?",
            text: "Let's create a digital marketing strategy that tells your brand's story and drives real business results.",
            label: "Start Your Project",
        },
    },
    ServiceDetail {
        service: Service::PerformanceMarketing,
        description: "Data-driven campaigns that deliver measurable results while maintaining your brand's narrative integrity.",
        features: &[
            "PPC Campaigns",
            "Conversion Optimization",
            "Analytics & Reporting",
            "A/B Testing",
        ],
        intro: "Data-driven campaigns that deliver measurable results while maintaining your brand's narrative integrity. Every dollar spent is optimized for maximum return on investment.",
        capabilities: &[
            Capability {
                title: "PPC Campaigns",
                description: "Strategic pay-per-click advertising that maximizes your budget and delivers qualified leads.",
                benefits: &["Google Ads Management", "Facebook Ads", "LinkedIn Advertising", "Retargeting Campaigns"],
            },
            Capability {
                title: "Conversion Optimization",
                description: "Data-driven improvements to your conversion funnel for maximum ROI and customer acquisition.",
                benefits: &["Landing Page Optimization", "A/B Testing", "User Experience Analysis", "Conversion Rate Improvement"],
            },
            Capability {
                title: "Analytics & Reporting",
                description: "Comprehensive tracking and reporting to measure success and identify growth opportunities.",
                benefits: &["Performance Dashboards", "ROI Tracking", "Attribution Modeling", "Custom Reports"],
            },
        ],
        offerings: &[
            Section {
                heading: "Advertising Platforms We Master",
                entries: &[
                    Offering {
                        title: "Google Ads",
                        description: "Search, Display, Shopping, and YouTube advertising",
                        items: &[],
                    },
                    Offering {
                        title: "Facebook & Instagram",
                        description: "Social media advertising with precise targeting",
                        items: &[],
                    },
                    Offering {
                        title: "LinkedIn Ads",
                        description: "B2B focused advertising for professional audiences",
                        items: &[],
                    },
                    Offering {
                        title: "Microsoft Ads",
                        description: "Bing search advertising for additional reach",
                        items: &[],
                    },
                    Offering {
                        title: "TikTok Ads",
                        description: "Engaging video content for younger demographics",
                        items: &[],
                    },
                    Offering {
                        title: "Amazon Advertising",
                        description: "E-commerce focused advertising solutions",
                        items: &[],
                    },
                ],
            },
            Section {
                heading: "Why Our Performance Marketing Works",
                entries: &[
                    Offering {
                        title: "Data-Driven Decisions",
                        description: "Every campaign decision is backed by comprehensive data analysis and real-time performance metrics.",
                        items: &[],
                    },
                    Offering {
                        title: "Creative Excellence",
                        description: "High-performing ads that don't sacrifice creativity for conversion - we deliver both impact and results.",
                        items: &[],
                    },
                    Offering {
                        title: "Continuous Optimization",
                        description: "24/7 monitoring and optimization ensures your campaigns are always performing at their peak potential.",
                        items: &[],
                    },
                    Offering {
                        title: "Transparent Reporting",
                        description: "Clear, detailed reporting that shows exactly how your investment is driving business growth.",
                        items: &[],
                    },
                ],
            },
        ],
        process: None,
        case_study: Some(CaseStudy {
            heading: "Performance That Speaks Volumes",
            summary: "Our performance marketing campaigns consistently deliver exceptional results across industries, from startups to enterprise companies.",
            metrics: &[
                Metric {
                    metric: "450%",
                    label: "Average ROAS Achieved",
                },
                Metric {
                    metric: "65%",
                    label: "Reduction in Cost Per Lead",
                },
                Metric {
                    metric: "280%",
                    label: "Increase in Conversion Rate",
                },
                Metric {
                    metric: "150%",
                    label: "Growth in Revenue",
                },
            ],
        }),
        cta: CallToAction {
            heading: "Ready to Maximize Your Marketing ROI?",
            text: "Let's create performance marketing campaigns that deliver measurable results and accelerate your business growth.",
            label: "Get Performance Audit",
        },
    },
    ServiceDetail {
        service: Service::SocialMediaMarketing,
        description: "Engaging social narratives that build communities and foster authentic connections with your audience.",
        features: &[
            "Content Strategy",
            "Community Management",
            "Account Handling",
            "Social Advertising",
        ],
        intro: "Engaging social narratives that build communities and foster authentic connections with your audience across all major platforms.",
        capabilities: &[
            Capability {
                title: "Content Strategy",
                description: "Compelling content that tells your brand story and engages your audience across all platforms.",
                benefits: &["Content Planning", "Brand Voice Development", "Visual Storytelling", "Content Calendar"],
            },
            Capability {
                title: "Community Management",
                description: "Building authentic relationships with your audience through meaningful interactions and engagement.",
                benefits: &["Daily Engagement", "Customer Support", "Community Building", "Reputation Management"],
            },
            Capability {
                title: "Social Advertising",
                description: "Targeted social media advertising campaigns that drive awareness, engagement, and conversions.",
                benefits: &["Paid Social Campaigns", "Audience Targeting", "Creative Development", "Performance Optimization"],
            },
        ],
        offerings: &[
            Section {
                heading: "Platforms We Dominate",
                entries: &[
                    Offering {
                        title: "Instagram",
                        description: "Visual storytelling through posts, stories, reels, and IGTV",
                        items: &[],
                    },
                    Offering {
                        title: "Facebook",
                        description: "Community building and targeted advertising for all demographics",
                        items: &[],
                    },
                    Offering {
                        title: "LinkedIn",
                        description: "Professional networking and B2B content marketing",
                        items: &[],
                    },
                    Offering {
                        title: "Twitter",
                        description: "Real-time engagement and thought leadership content",
                        items: &[],
                    },
                    Offering {
                        title: "YouTube",
                        description: "Long-form video content and educational storytelling",
                        items: &[],
                    },
                ],
            },
            Section {
                heading: "Content That Connects",
                entries: &[
                    Offering {
                        title: "Visual Posts",
                        description: "Eye-catching graphics and photography that stop the scroll",
                        items: &[],
                    },
                    Offering {
                        title: "Video Content",
                        description: "Engaging reels, stories, and long-form videos that tell your story",
                        items: &[],
                    },
                    Offering {
                        title: "User-Generated Content",
                        description: "Authentic content from your community that builds trust",
                        items: &[],
                    },
                    Offering {
                        title: "Interactive Content",
                        description: "Polls, quizzes, and live sessions that boost engagement",
                        items: &[],
                    },
                ],
            },
        ],
        process: None,
        case_study: Some(CaseStudy {
            heading: "Social Media Success Stories",
            summary: "Our social media strategies have helped brands build thriving communities and achieve remarkable growth across all platforms.",
            metrics: &[
                Metric {
                    metric: "500%",
                    label: "Average Engagement Growth",
                },
                Metric {
                    metric: "300%",
                    label: "Increase in Followers",
                },
                Metric {
                    metric: "250%",
                    label: "Boost in Brand Mentions",
                },
                Metric {
                    metric: "180%",
                    label: "Growth in Social Traffic",
                },
            ],
        }),
        cta: CallToAction {
            heading: "Ready to Build Your Social Community?",
            text: "Let's create social media strategies that turn followers into loyal brand advocates and drive real business results.",
            label: "Start Social Strategy",
        },
    },
    ServiceDetail {
        service: Service::SeoAnalytics,
        description: "Strategic optimization that ensures your stories reach the right audience at the right time.",
        features: &[
            "Technical SEO",
            "Content Optimization",
            "Performance Tracking",
            "Competitive Analysis",
        ],
        intro: "Strategic optimization that ensures your stories reach the right audience at the right time, with comprehensive analytics to measure and improve performance.",
        capabilities: &[
            Capability {
                title: "Technical SEO",
                description: "Comprehensive technical optimization to ensure your website meets all search engine requirements.",
                benefits: &["Site Speed Optimization", "Mobile Responsiveness", "Schema Markup", "Core Web Vitals"],
            },
            Capability {
                title: "Content Optimization",
                description: "Strategic content optimization that balances search visibility with compelling storytelling.",
                benefits: &["Keyword Research", "Content Strategy", "On-Page SEO", "Content Gap Analysis"],
            },
            Capability {
                title: "Performance Tracking",
                description: "Advanced analytics and reporting to measure SEO success and identify growth opportunities.",
                benefits: &["Ranking Monitoring", "Traffic Analysis", "Conversion Tracking", "Custom Dashboards"],
            },
        ],
        offerings: &[Section {
            heading: "Specialized SEO Services",
            entries: &[
                Offering {
                    title: "Local SEO",
                    description: "Dominate local search results and attract nearby customers to your business.",
                    items: &["Google My Business", "Local Citations", "Review Management", "Local Content"],
                },
                Offering {
                    title: "E-commerce SEO",
                    description: "Specialized SEO strategies for online stores to increase product visibility and sales.",
                    items: &["Product Optimization", "Category Pages", "Shopping Feed", "Technical Audits"],
                },
                Offering {
                    title: "Enterprise SEO",
                    description: "Large-scale SEO solutions for enterprise websites with complex structures.",
                    items: &["Site Architecture", "International SEO", "Migration Support", "Team Training"],
                },
            ],
        }],
        process: Some(Section {
            heading: "Our SEO Process",
            entries: &[
                ProcessStep {
                    step: "01",
                    title: "SEO Audit",
                    description: "Comprehensive analysis of your current SEO performance",
                },
                ProcessStep {
                    step: "02",
                    title: "Strategy",
                    description: "Custom SEO strategy based on your goals and competition",
                },
                ProcessStep {
                    step: "03",
                    title: "Implementation",
                    description: "Execute technical and content optimizations",
                },
                ProcessStep {
                    step: "04",
                    title: "Monitor & Optimize",
                    description: "Continuous monitoring and improvement of results",
                },
            ],
        }),
        case_study: Some(CaseStudy {
            heading: "SEO Results That Matter",
            summary: "Our SEO strategies consistently deliver exceptional organic growth and improved search visibility for businesses across all industries.",
            metrics: &[
                Metric {
                    metric: "400%",
                    label: "Average Organic Traffic Growth",
                },
                Metric {
                    metric: "250%",
                    label: "Increase in Keyword Rankings",
                },
                Metric {
                    metric: "180%",
                    label: "Boost in Conversion Rate",
                },
                Metric {
                    metric: "300%",
                    label: "Growth in Online Visibility",
                },
            ],
        }),
        cta: CallToAction {
            heading: "Ready to Dominate Search Results?",
            text: "Let's create an SEO strategy that puts your brand at the top of search results and drives qualified traffic to your website.",
            label: "Get SEO Audit",
        },
    },
    ServiceDetail {
        service: Service::ContentCreation,
        description: "Compelling content that doesn't just inform it captivates, engages, and converts your audience.",
        features: &[
            "Video Production",
            "Copywriting",
            "Visual Design",
            "Interactive Content",
        ],
        intro: "Compelling content that doesn't just inform, it captivates, engages, and converts your audience through powerful storytelling and visual excellence.",
        capabilities: &[
            Capability {
                title: "Video Production",
                description: "Cinematic video content that tells your brand story with visual impact and emotional resonance.",
                benefits: &["Brand Videos", "Product Demos", "Social Media Content", "Commercial Production"],
            },
            Capability {
                title: "Copywriting",
                description: "Compelling written content that captures your brand voice and drives action across all platforms.",
                benefits: &["Website Copy", "Blog Content", "Ad Copy", "Email Marketing"],
            },
            Capability {
                title: "Visual Design",
                description: "Stunning visual content that captures attention and communicates your message effectively.",
                benefits: &["Graphic Design", "Infographics", "Social Media Graphics", "Brand Assets"],
            },
        ],
        offerings: &[Section {
            heading: "Content That Converts",
            entries: &[
                Offering {
                    title: "Brand Videos",
                    description: "Cinematic storytelling that showcases your brand's personality and values",
                    items: &["Company Stories", "Product Launches", "Behind the Scenes", "Customer Testimonials"],
                },
                Offering {
                    title: "Social Content",
                    description: "Engaging content optimized for each social media platform",
                    items: &["Instagram Posts", "TikTok Videos", "LinkedIn Articles", "Twitter Threads"],
                },
                Offering {
                    title: "Marketing Materials",
                    description: "Professional marketing collateral that drives conversions",
                    items: &["Brochures", "Presentations", "Email Templates", "Landing Pages"],
                },
                Offering {
                    title: "Interactive Content",
                    description: "Engaging interactive experiences that boost user engagement",
                    items: &["Quizzes", "Polls", "Interactive Videos", "AR Filters"],
                },
            ],
        }],
        process: None,
        case_study: Some(CaseStudy {
            heading: "Content That Delivers Results",
            summary: "Our content creation strategies consistently drive engagement, build brand awareness, and convert audiences into loyal customers.",
            metrics: &[
                Metric {
                    metric: "350%",
                    label: "Increase in Engagement",
                },
                Metric {
                    metric: "280%",
                    label: "Growth in Content Reach",
                },
                Metric {
                    metric: "200%",
                    label: "Boost in Brand Awareness",
                },
                Metric {
                    metric: "150%",
                    label: "Improvement in Conversions",
                },
            ],
        }),
        cta: CallToAction {
            heading: "Ready to Create Content That Captivates?",
            text: "Let's create compelling content that tells your brand story and drives meaningful engagement with your audience.",
            label: "Start Creating",
        },
    },
    ServiceDetail {
        service: Service::Branding,
        description: "Complete brand identity development that tells your unique story across every touchpoint.",
        features: &[
            "Brand Strategy",
            "Visual Identity",
            "Brand Guidelines",
            "Brand Positioning",
        ],
        intro: "Complete brand identity development that tells your unique story across every touchpoint, creating lasting connections with your audience.",
        capabilities: &[
            Capability {
                title: "Brand Strategy",
                description: "Comprehensive brand strategy that defines your unique position and connects with your target audience.",
                benefits: &["Brand Positioning", "Market Research", "Competitive Analysis", "Brand Architecture"],
            },
            Capability {
                title: "Visual Identity",
                description: "Distinctive visual identity that captures your brand essence and creates memorable experiences.",
                benefits: &["Logo Design", "Color Palette", "Typography", "Visual Guidelines"],
            },
            Capability {
                title: "Brand Guidelines",
                description: "Comprehensive brand guidelines that ensure consistent application across all touchpoints.",
                benefits: &["Style Guide", "Usage Rules", "Application Examples", "Brand Standards"],
            },
        ],
        offerings: &[Section {
            heading: "Complete Branding Solutions",
            entries: &[
                Offering {
                    title: "Logo & Identity Design",
                    description: "Memorable logos and visual identities that represent your brand's unique personality",
                    items: &["Primary Logo", "Logo Variations", "Brand Mark", "Favicon"],
                },
                Offering {
                    title: "Brand Strategy & Positioning",
                    description: "Strategic foundation that defines your brand's purpose, values, and market position",
                    items: &["Brand Strategy", "Positioning Statement", "Brand Voice", "Messaging Framework"],
                },
                Offering {
                    title: "Visual Brand System",
                    description: "Comprehensive visual system that brings your brand to life across all applications",
                    items: &["Color System", "Typography", "Iconography", "Photography Style"],
                },
                Offering {
                    title: "Brand Guidelines",
                    description: "Detailed guidelines that ensure consistent brand application and protect brand integrity",
                    items: &["Brand Manual", "Usage Guidelines", "Do's and Don'ts", "Application Examples"],
                },
            ],
        }],
        process: Some(Section {
            heading: "Our Branding Process",
            entries: &[
                ProcessStep {
                    step: "01",
                    title: "Discovery",
                    description: "Deep dive into your brand, market, and audience",
                },
                ProcessStep {
                    step: "02",
                    title: "Strategy",
                    description: "Develop brand strategy and positioning framework",
                },
                ProcessStep {
                    step: "03",
                    title: "Design",
                    description: "Create visual identity and brand assets",
                },
                ProcessStep {
                    step: "04",
                    title: "Guidelines",
                    description: "Deliver comprehensive brand guidelines",
                },
            ],
        }),
        case_study: Some(CaseStudy {
            heading: "Brands We've Transformed",
            summary: "Our branding strategies have helped businesses build stronger brand recognition, increase customer loyalty, and achieve sustainable growth.",
            metrics: &[
                Metric {
                    metric: "400%",
                    label: "Increase in Brand Recognition",
                },
                Metric {
                    metric: "300%",
                    label: "Growth in Brand Equity",
                },
                Metric {
                    metric: "250%",
                    label: "Boost in Customer Loyalty",
                },
                Metric {
                    metric: "180%",
                    label: "Improvement in Brand Perception",
                },
            ],
        }),
        cta: CallToAction {
            heading: "Ready to Build a Memorable Brand?",
            text: "Let's create a brand identity that tells your unique story and connects with your audience on a deeper level.",
            label: "Start Your Brand",
        },
    },
];

pub fn service_by_slug(slug: &str) -> Option<&'static ServiceDetail> {
    let service = Service::from_slug(slug)?;

    SERVICES.iter().find(|d| d.service == service)
}

pub struct Principle {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content: &'static str,
}

pub static PRINCIPLES: [Principle; 3] = [
    Principle {
        title: "WHY",
        subtitle: "Our Purpose",
        content: "We believe every brand has a unique story waiting to be told. In a world saturated with advertisements, we create narratives that don't just sell products they build emotional connections that last a lifetime.",
    },
    Principle {
        title: "HOW",
        subtitle: "Our Approach",
        content: "Through cinematic storytelling, data driven insights, and creative innovation, we transform your brand's essence into compelling narratives that resonate across all digital platforms and touchpoints.",
    },
    Principle {
        title: "WHAT",
        subtitle: "Our Promise",
        content: "We deliver comprehensive marketing solutions that combine strategic thinking with creative execution, ensuring your brand doesn't just reach your audience it moves them, inspires them, and stays with them.",
    },
];

pub struct WorkflowStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub static WORKFLOW: [WorkflowStep; 5] = [
    WorkflowStep {
        step: "01",
        title: "Understand Clients",
        description: "We dive deep into your brand's DNA, understanding your vision, goals, and the story you want to tell.",
        details: &[
            "Brand discovery sessions",
            "Market research & analysis",
            "Audience persona development",
            "Competitive landscape review",
        ],
    },
    WorkflowStep {
        step: "02",
        title: "Plan & Proposal",
        description: "Strategic planning meets creative vision as we craft a comprehensive roadmap for your success.",
        details: &[
            "Strategic framework development",
            "Creative concept ideation",
            "Timeline & milestone planning",
            "Budget optimization",
        ],
    },
    WorkflowStep {
        step: "03",
        title: "Production",
        description: "Where ideas come to life through cinematic storytelling and cutting-edge creative execution.",
        details: &[
            "Content creation & production",
            "Visual design & branding",
            "Video & multimedia production",
            "Quality assurance & testing",
        ],
    },
    WorkflowStep {
        step: "04",
        title: "Promotion",
        description: "Strategic deployment across all channels to ensure your story reaches and resonates with your audience.",
        details: &[
            "Multi-channel campaign launch",
            "Performance monitoring",
            "Real-time optimization",
            "Audience engagement tracking",
        ],
    },
    WorkflowStep {
        step: "05",
        title: "Feedback & Optimization",
        description: "Continuous improvement through data analysis and client collaboration for sustained success.",
        details: &[
            "Performance analysis & reporting",
            "Client feedback integration",
            "Strategy refinement",
            "Long-term optimization",
        ],
    },
];

pub struct Advantage {
    pub title: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
}

pub static ADVANTAGES: [Advantage; 5] = [
    Advantage {
        title: "Creative Freedom",
        description: "We believe the best ideas come from unrestricted creativity. Our team has the freedom to explore bold concepts and innovative approaches that set your brand apart.",
        stats: "100% Original Concepts",
    },
    Advantage {
        title: "Founders-Led Attention",
        description: "Your project gets direct attention from our founders, ensuring every detail aligns with your vision and our commitment to excellence.",
        stats: "Personal Involvement",
    },
    Advantage {
        title: "Cinematic Storytelling",
        description: "We don't just create ads we craft cinematic experiences that captivate audiences and leave lasting impressions through powerful storytelling.",
        stats: "Award-Winning Creative",
    },
    Advantage {
        title: "Young Creativity",
        description: "Our young, dynamic team brings fresh perspectives and cutting edge trends to every project, ensuring your brand stays ahead of the curve.",
        stats: "Gen-Z Insights",
    },
    Advantage {
        title: "No Barriers for Team",
        description: "We foster an environment where every team member can contribute their best ideas, creating a collaborative culture that drives innovation.",
        stats: "Collaborative Excellence",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
    pub company: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "The Ad Foundry transformed our brand story in ways we never imagined. Their cinematic approach made our products feel like characters in an epic tale.",
        author: "Sarah Johnson",
        position: "Marketing Director",
        company: "TechFlow Solutions",
    },
    Testimonial {
        quote: "Working with their young, creative team was refreshing. They understood our vision and elevated it beyond our expectations.",
        author: "Michael Chen",
        position: "Founder",
        company: "GreenSpace Innovations",
    },
];

/// "What happens next" list on the contact page.
pub static NEXT_STEPS: [&str; 4] = [
    "We'll review your project details within 24 hours",
    "Schedule a discovery call to understand your vision",
    "Create a customized proposal tailored to your needs",
    "Begin crafting your unique brand story",
];
