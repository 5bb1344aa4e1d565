use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::logo::Logo;
use crate::config;
use crate::Route;

/// One block of body copy inside a legal section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Block {
    Para(&'static str),
    Subheading(&'static str),
    /// Bullets as `(bold label, text)`; an empty label renders plain text.
    Bullets(&'static [(&'static str, &'static str)]),
    Numbered(&'static [&'static str]),
    /// The company's postal address.
    Address,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegalSection {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

/// Marker replaced by the site's base URL when rendered.
const SITE: &str = "{site}";

fn expand(text: &str) -> String {
    text.replace(SITE, config::get_site_url())
}

pub static PRIVACY_SECTIONS: [LegalSection; 13] = [
    LegalSection {
        title: "1. Introduction",
        blocks: &[
            Block::Para("Welcome to Aitoma (\"Aitoma\", \"we\", \"us\", or \"our\"). Aitoma is an intelligence lab that partners with businesses to architect and implement intelligent systems. Our services are managed and operated by our parent company, Filtroo Oü."),
            Block::Para("This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you visit our website, {site} (the \"Website\"), and when you use our services (the \"Services\"). Please read this privacy policy carefully. If you do not agree with the terms of this privacy policy, please do not access the site."),
            Block::Para("We are committed to protecting your personal data and respecting your privacy in compliance with applicable laws, including the General Data Protection Regulation (GDPR)."),
        ],
    },
    LegalSection {
        title: "2. Data Controller",
        blocks: &[
            Block::Para("For the purpose of the GDPR, the data controller is:"),
            Block::Address,
            Block::Para("Any inquiries regarding this policy or your data can be directed to the contact information provided at the end of this document."),
        ],
    },
    LegalSection {
        title: "3. Information We Collect",
        blocks: &[
            Block::Para("We may collect information about you in a variety of ways. The information we may collect on the Website and through our Services includes:"),
            Block::Subheading("Personal Data You Provide to Us"),
            Block::Para("We collect personal data that you voluntarily provide to us when you express an interest in obtaining information about us or our products and services, when you participate in activities on the Website, or otherwise when you contact us. The personal data that we collect depends on the context of your interactions with us and the Website, but may include the following:"),
            Block::Bullets(&[
                ("Contact Information:", "such as your first and last name, email address, phone number, and company name."),
                ("Communications:", "such as information you provide when you contact us for a consultation or for support."),
            ]),
            Block::Subheading("Data We Collect Automatically"),
            Block::Para("When you visit our Website, we may automatically collect certain information from your device. This information may include:"),
            Block::Bullets(&[
                ("Log and Usage Data:", "such as your IP address, browser type, operating system, referring URLs, pages viewed, and the dates/times of your visits."),
                ("Cookies and Similar Technologies:", "We use cookies and similar tracking technologies to track the activity on our Website and hold certain information. For further information, please see our \"Cookies and Tracking Technologies\" section below."),
            ]),
            Block::Subheading("Data Processed on Behalf of Our Clients"),
            Block::Para("In providing our Services, we may process data that our clients provide to us. In this context, Aitoma acts as a Data Processor and our client acts as the Data Controller. The data processed may include business data, operational metrics, customer information, and other data necessary to design, build, and deploy our intelligent systems. Our processing of this data is governed by the terms of our service agreements with our clients."),
        ],
    },
    LegalSection {
        title: "4. How We Use Your Information",
        blocks: &[
            Block::Para("We use the information we collect or receive for the following purposes:"),
            Block::Bullets(&[
                ("To Provide and Manage Our Services:", "To enter into and perform our contract with you or your company, including creating and managing your account, providing customer support, and delivering the services you have requested."),
                ("To Respond to Inquiries and Offer Support:", "To respond to your inquiries, and solve any potential issues you might have with the use of our Services."),
                ("For Business and Operational Purposes:", "To analyze website usage, improve our Website and Service offerings, and for other internal business purposes."),
                ("To Send Administrative and Marketing Communications:", "We may use your personal information to send you product, service, and new feature information and/or information about changes to our terms, conditions, and policies. We may also use your information for our marketing purposes, if this is in accordance with your marketing preferences."),
                ("To Protect Our Services:", "To keep our Website and Services safe and secure (for example, for fraud monitoring and prevention)."),
            ]),
        ],
    },
    LegalSection {
        title: "5. Legal Basis for Processing (GDPR)",
        blocks: &[
            Block::Para("If you are from the European Economic Area (EEA), our legal basis for collecting and using the personal information described above will depend on the personal information concerned and the specific context in which we collect it."),
            Block::Bullets(&[
                ("Consent:", "We may process your data if you have given us specific consent to use your personal information for a specific purpose (e.g., marketing communications)."),
                ("Performance of a Contract:", "We may process your personal information when it is necessary for the performance of a contract to which you are a party or in order to take steps at your request before entering into such a contract."),
                ("Legitimate Interests:", "We may process your data when it is reasonably necessary to achieve our legitimate business interests, such as for improving our services and for analytics, provided that your interests and fundamental rights do not override those interests."),
                ("Legal Obligations:", "We may disclose your information where we are legally required to do so in order to comply with applicable law, governmental requests, a judicial proceeding, court order, or legal process."),
            ]),
        ],
    },
    LegalSection {
        title: "6. Data Sharing and Disclosure",
        blocks: &[Block::Para("We do not sell your personal information. We may share your information with third parties that perform services for us or on our behalf, including data analysis, hosting services, and customer service. These third parties are contractually obligated to protect your data.")],
    },
    LegalSection {
        title: "7. Data Retention",
        blocks: &[Block::Para("We will only keep your personal information for as long as it is necessary for the purposes set out in this privacy policy, unless a longer retention period is required or permitted by law (such as tax, accounting, or other legal requirements).")],
    },
    LegalSection {
        title: "8. Your Data Protection Rights under GDPR",
        blocks: &[
            Block::Para("If you are a resident in the EEA, you have the following data protection rights:"),
            Block::Bullets(&[
                ("", "The right to access, update, or delete the information we have on you."),
                ("", "The right of rectification."),
                ("", "The right to object to our processing of your personal data."),
                ("", "The right of restriction."),
                ("", "The right to data portability."),
                ("", "The right to withdraw consent at any time."),
            ]),
            Block::Para("You may exercise any of these rights by contacting us using the details provided below."),
        ],
    },
    LegalSection {
        title: "9. Cookies and Tracking Technologies",
        blocks: &[Block::Para("We use cookies and similar tracking technologies to access or store information. Specific information about how we use such technologies and how you can refuse certain cookies is set out in our Cookie Policy (if applicable) or can be managed through your browser settings.")],
    },
    LegalSection {
        title: "10. International Data Transfers",
        blocks: &[Block::Para("Your information, including personal data, may be transferred to, and maintained on, computers located outside of your state, province, country, or other governmental jurisdiction where the data protection laws may differ from those of your jurisdiction. As we are based in Estonia, we comply with GDPR requirements for any transfers of data outside the EEA.")],
    },
    LegalSection {
        title: "11. Security of Your Information",
        blocks: &[Block::Para("We use administrative, technical, and physical security measures to help protect your personal information. While we have taken reasonable steps to secure the personal information you provide to us, please be aware that despite our efforts, no security measures are perfect or impenetrable, and no method of data transmission can be guaranteed against any interception or other type of misuse.")],
    },
    LegalSection {
        title: "12. Changes to This Privacy Policy",
        blocks: &[Block::Para("We may update this privacy policy from time to time. The updated version will be indicated by an updated \"Last Updated\" date and the updated version will be effective as soon as it is accessible. We encourage you to review this privacy policy frequently to be informed of how we are protecting your information.")],
    },
    LegalSection {
        title: "13. Contact Us",
        blocks: &[
            Block::Para("If you have questions or comments about this policy, you may contact us at:"),
            Block::Address,
        ],
    },
];

pub static TERMS_SECTIONS: [LegalSection; 11] = [
    LegalSection {
        title: "1. Agreement to Terms",
        blocks: &[
            Block::Para("These Terms and Conditions constitute a legally binding agreement made between you, whether personally or on behalf of an entity (\"you\" or \"Client\") and Filtroo Oü (\"Filtroo\", \"we,\" \"us,\" or \"our\"), concerning your access to and use of the {site} website as well as any other media form, media channel, mobile website or mobile application related, linked, or otherwise connected thereto (collectively, the \"Site\"). Filtroo Oü is the legal entity that owns and operates the Aitoma brand and provides its services."),
            Block::Para("You agree that by accessing the Site and our Services, you have read, understood, and agree to be bound by all of these Terms and Conditions. IF YOU DO NOT AGREE WITH ALL OF THESE TERMS AND CONDITIONS, THEN YOU ARE EXPRESSLY PROHIBITED FROM USING THE SITE AND OUR SERVICES AND YOU MUST DISCONTINUE USE IMMEDIATELY."),
            Block::Para("Supplemental terms and conditions or documents that may be posted on the Site from time to time are hereby expressly incorporated herein by reference. We reserve the right, in our sole discretion, to make changes or modifications to these Terms and Conditions at any time and for any reason."),
        ],
    },
    LegalSection {
        title: "2. Our Services",
        blocks: &[
            Block::Para("Aitoma provides strategic consulting and implementation services to help businesses integrate artificial intelligence. Our services include, but are not limited to:"),
            Block::Bullets(&[
                ("Intelligent Operations:", "Designing and implementing self-managing operational systems."),
                ("Creative Systems:", "Developing AI-powered content creation and brand voice solutions."),
                ("Training & Adoption:", "Providing workshops and training for human-AI team integration."),
                ("Custom Architecture:", "Designing and developing bespoke AI systems and infrastructure."),
            ]),
            Block::Para("The specific scope of services, deliverables, timelines, and fees for any engagement will be detailed in a separate, written Statement of Work (SOW) or client agreement signed by both parties."),
        ],
    },
    LegalSection {
        title: "3. Intellectual Property Rights",
        blocks: &[
            Block::Para("Unless otherwise indicated, the Site is our proprietary property and all source code, databases, functionality, software, website designs, audio, video, text, photographs, and graphics on the Site (collectively, the \"Content\") and the trademarks, service marks, and logos contained therein (the \"Marks\") are owned or controlled by us or licensed to us, and are protected by copyright and trademark laws."),
            Block::Para("For services rendered, the intellectual property rights for any custom systems, code, or materials developed specifically for a Client (\"Deliverables\") will be outlined in the applicable SOW. Unless otherwise agreed in writing, upon full payment for the services, the Client will be granted a license to use the Deliverables for their internal business purposes. We retain the right to use our general knowledge, skills, experience, and any pre-existing intellectual property in the course of providing our services."),
        ],
    },
    LegalSection {
        title: "4. Client Responsibilities and Representations",
        blocks: &[
            Block::Para("By using the Site and our Services, you represent and warrant that:"),
            Block::Numbered(&[
                "All registration and contact information you submit will be true, accurate, current, and complete.",
                "You have the legal capacity and you agree to comply with these Terms and Conditions.",
                "You will not use the Site or Services for any illegal or unauthorized purpose.",
                "You will provide us with timely access to necessary personnel, data, and systems required for us to perform the Services as outlined in the SOW.",
                "You have the necessary rights and permissions to provide us with any data or materials shared in the course of our engagement.",
            ]),
        ],
    },
    LegalSection {
        title: "5. Fees and Payment",
        blocks: &[Block::Para("Fees for our Services will be set forth in the applicable SOW or client agreement. Unless otherwise specified, payment terms will be detailed in the invoices we provide. We reserve the right to suspend or terminate services for failure to pay invoices in a timely manner.")],
    },
    LegalSection {
        title: "6. Term and Termination",
        blocks: &[Block::Para("These Terms and Conditions shall remain in full force and effect while you use the Site or are a client. The term and termination conditions for specific service engagements will be governed by the SOW or client agreement. We reserve the right to, in our sole discretion and without notice or liability, deny access to and use of the Site and our Services to any person for any reason or for no reason.")],
    },
    LegalSection {
        title: "7. Disclaimers",
        blocks: &[
            Block::Para("THE SITE AND OUR SERVICES ARE PROVIDED ON AN AS-IS AND AS-AVAILABLE BASIS. YOU AGREE THAT YOUR USE OF THE SITE AND OUR SERVICES WILL BE AT YOUR SOLE RISK. TO THE FULLEST EXTENT PERMITTED BY LAW, WE DISCLAIM ALL WARRANTIES, EXPRESS OR IMPLIED, IN CONNECTION WITH THE SITE AND YOUR USE THEREOF, INCLUDING, WITHOUT LIMITATION, THE IMPLIED WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE, AND NON-INFRINGEMENT."),
            Block::Para("WE DO NOT WARRANT THAT THE RESULTS OF OUR SERVICES WILL MEET YOUR REQUIREMENTS OR THAT THE OPERATION OF ANY DELIVERABLES WILL BE UNINTERRUPTED OR ERROR-FREE. THE FIELD OF ARTIFICIAL INTELLIGENCE IS RAPIDLY EVOLVING, AND WE DO NOT GUARANTEE ANY SPECIFIC BUSINESS OUTCOMES."),
        ],
    },
    LegalSection {
        title: "8. Limitation of Liability",
        blocks: &[
            Block::Para("IN NO EVENT WILL WE OR OUR DIRECTORS, EMPLOYEES, OR AGENTS BE LIABLE TO YOU OR ANY THIRD PARTY FOR ANY DIRECT, INDIRECT, CONSEQUENTIAL, EXEMPLARY, INCIDENTAL, SPECIAL, OR PUNITIVE DAMAGES, INCLUDING LOST PROFIT, LOST REVENUE, LOSS OF DATA, OR OTHER DAMAGES ARISING FROM YOUR USE OF THE SITE OR OUR SERVICES, EVEN IF WE HAVE BEEN ADVISED OF THE POSSIBILITY OF SUCH DAMAGES."),
            Block::Para("NOTWITHSTANDING ANYTHING TO THE CONTRARY CONTAINED HEREIN, OUR LIABILITY TO YOU FOR ANY CAUSE WHATSOEVER AND REGARDLESS OF THE FORM OF THE ACTION, WILL AT ALL TIMES BE LIMITED TO THE AMOUNT PAID, IF ANY, BY YOU TO US DURING THE SIX (6) MONTH PERIOD PRIOR TO ANY CAUSE OF ACTION ARISING."),
        ],
    },
    LegalSection {
        title: "9. Governing Law and Jurisdiction",
        blocks: &[Block::Para("These Terms and Conditions and your use of the Site and Services are governed by and construed in accordance with the laws of the Republic of Estonia applicable to agreements made and to be entirely performed within the Republic of Estonia, without regard to its conflict of law principles. Any legal action or proceeding arising under these Terms and Conditions will be brought exclusively in the courts located in Tallinn, Estonia, and the parties hereby irrevocably consent to the personal jurisdiction and venue therein.")],
    },
    LegalSection {
        title: "10. Miscellaneous",
        blocks: &[Block::Para("These Terms and Conditions and any policies or operating rules posted by us on the Site or in respect to the Services constitute the entire agreement and understanding between you and us. Our failure to exercise or enforce any right or provision of these Terms and Conditions shall not operate as a waiver of such right or provision.")],
    },
    LegalSection {
        title: "11. Contact Us",
        blocks: &[
            Block::Para("In order to resolve a complaint regarding the Site or our Services, or to receive further information regarding use of the Site, please contact us at:"),
            Block::Address,
        ],
    },
];

fn render_block(block: &Block) -> Html {
    match *block {
        Block::Para(text) => html! { <p>{expand(text)}</p> },
        Block::Subheading(text) => html! { <h3>{text}</h3> },
        Block::Bullets(items) => html! {
            <ul>
                { for items.iter().map(|(label, text)| html! {
                    <li>
                        if !label.is_empty() {
                            <strong>{*label}</strong>{" "}
                        }
                        {expand(text)}
                    </li>
                }) }
            </ul>
        },
        Block::Numbered(items) => html! {
            <ol>
                { for items.iter().map(|text| html! { <li>{expand(text)}</li> }) }
            </ol>
        },
        Block::Address => html! {
            <p>
                <strong>{config::COMPANY_NAME}</strong>
                { for config::COMPANY_ADDRESS.iter().map(|line| html! { <><br />{*line}</> }) }
            </p>
        },
    }
}

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    sections: &'static [LegalSection],
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.title.clone(),
    );

    html! {
        <div class="legal-page">
            <style>
                {r#"
                .legal-page {
                    min-height: 100vh;
                    background: #EAEAEA;
                    color: #0A0A0A;
                }
                .legal-back {
                    position: fixed;
                    top: 2rem;
                    right: 2rem;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.6rem 1.25rem;
                    background: #0A0A0A;
                    color: #fff;
                    border-radius: 999px;
                    font-size: 0.9rem;
                    text-decoration: none;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                }
                .legal-back:hover {
                    opacity: 0.9;
                }
                .legal-header {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }
                .legal-header svg {
                    width: 10rem;
                    height: auto;
                    color: #0A0A0A;
                }
                .legal-content {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                    line-height: 1.7;
                }
                .legal-content h1 {
                    font-size: clamp(2rem, 5vw, 3rem);
                    letter-spacing: -0.03em;
                }
                .legal-content h2 {
                    margin-top: 2.5rem;
                    font-size: 1.4rem;
                }
                .legal-content h3 {
                    margin-top: 1.5rem;
                    font-size: 1.1rem;
                }
                .legal-content ul,
                .legal-content ol {
                    padding-left: 1.25rem;
                }
                .legal-content li {
                    margin-bottom: 0.5rem;
                }
                @media (max-width: 1023px) {
                    .legal-back {
                        display: none;
                    }
                }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="legal-back">{"← Back Home"}</Link<Route>>
            <header class="legal-header">
                <Link<Route> to={Route::Home}><Logo /></Link<Route>>
            </header>
            <main class="legal-content">
                <h1>{props.title.clone()}</h1>
                <p><strong>{format!("Last Updated: {}", config::LEGAL_LAST_UPDATED)}</strong></p>
                { for props.sections.iter().map(|section| html! {
                    <section>
                        <h2>{section.title}</h2>
                        { for section.blocks.iter().map(render_block) }
                    </section>
                }) }
            </main>
            <SiteFooter />
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalPage title="Privacy Policy" sections={&PRIVACY_SECTIONS[..]} /> }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! { <LegalPage title="Terms and Conditions" sections={&TERMS_SECTIONS[..]} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_blocks() -> impl Iterator<Item = &'static Block> {
        PRIVACY_SECTIONS
            .iter()
            .chain(TERMS_SECTIONS.iter())
            .flat_map(|s| s.blocks.iter())
    }

    #[test]
    fn sections_are_numbered_in_order() {
        for sections in [&PRIVACY_SECTIONS[..], &TERMS_SECTIONS[..]] {
            for (i, section) in sections.iter().enumerate() {
                assert!(
                    section.title.starts_with(&format!("{}. ", i + 1)),
                    "{}",
                    section.title
                );
            }
        }
    }

    #[test]
    fn both_pages_end_with_the_company_address() {
        for sections in [&PRIVACY_SECTIONS[..], &TERMS_SECTIONS[..]] {
            let last = sections.last().map(|s| s.blocks.last());
            assert_eq!(last, Some(Some(&Block::Address)));
        }
    }

    #[test]
    fn site_marker_is_expanded() {
        let with_marker = all_blocks()
            .filter(|b| matches!(b, Block::Para(text) if text.contains(SITE)))
            .count();
        assert_eq!(with_marker, 2);
        let expanded = expand("visit {site} today");
        assert!(!expanded.contains(SITE));
        assert!(expanded.contains(config::get_site_url()));
    }
}
